//! Semantic invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::content::DiagnosisContent;
use crate::core::types::ResultId;

/// Check semantic invariants not expressible in JSON Schema:
/// - Question ids are `1..=N` in order (unique by construction)
/// - No duplicate category within one question's options
/// - Exactly one catalog entry per result id
/// - Result reasons are present
pub fn validate_invariants(content: &DiagnosisContent) -> Vec<String> {
    let mut errors = Vec::new();

    for (position, question) in content.questions.iter().enumerate() {
        let expected_id = position as u32 + 1;
        if question.id != expected_id {
            errors.push(format!(
                "question at position {position}: id {} should be {expected_id}",
                question.id
            ));
        }

        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.category) {
                errors.push(format!(
                    "question {}: duplicate category {} among options",
                    question.id, option.category
                ));
            }
        }
    }

    for id in ResultId::ALL {
        let count = content.results.iter().filter(|entry| entry.id == id).count();
        if count != 1 {
            errors.push(format!("result catalog: expected 1 entry for '{id}', found {count}"));
        }
    }

    for entry in &content.results {
        if entry.reasons.is_empty() {
            errors.push(format!("result '{}': reasons must not be empty", entry.id));
        }
    }

    errors
}
