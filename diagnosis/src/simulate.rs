//! Scripted sessions for `diagnosis simulate`.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use crate::content::{QuestionBank, ResultCatalog};
use crate::core::session::DiagnosisSession;
use crate::core::types::{Category, ResultId, Tally};

/// Summary of one scripted run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    /// Identifier chosen by the decision procedure.
    pub result: ResultId,
    /// Display name of the recommended course.
    pub course: String,
    /// Price text of the recommended course.
    pub price: String,
    /// Final tally the decision was made from.
    pub tally: Tally,
}

/// Parse a category sequence like `A,B,C,D,A` (commas and/or whitespace).
pub fn parse_answers(input: &str) -> Result<Vec<Category>> {
    let answers = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<Category>().map_err(|err| anyhow!(err)))
        .collect::<Result<Vec<_>>>()?;
    if answers.is_empty() {
        return Err(anyhow!("no answers given"));
    }
    Ok(answers)
}

/// Run `answers` through a fresh session and report the outcome.
///
/// The sequence must contain exactly one answer per question, and each answer
/// must be a category the question offers.
pub fn simulate(
    bank: &QuestionBank,
    catalog: &ResultCatalog,
    answers: &[Category],
) -> Result<SimulationOutcome> {
    if answers.len() != bank.len() {
        return Err(anyhow!(
            "expected {} answers (one per question), got {}",
            bank.len(),
            answers.len()
        ));
    }

    let mut session = DiagnosisSession::new(bank);
    for (position, category) in answers.iter().enumerate() {
        session
            .submit_answer(*category)
            .with_context(|| format!("answer {} of {}", position + 1, answers.len()))?;
    }

    let result = session
        .result()
        .ok_or_else(|| anyhow!("session did not complete after {} answers", answers.len()))?;
    // Unreachable after content validation; a miss here is a build defect.
    let entry = catalog
        .entry(result)
        .with_context(|| format!("result catalog missing entry for '{result}'"))?;

    Ok(SimulationOutcome {
        result,
        course: entry.name.clone(),
        price: entry.price.clone(),
        tally: *session.tally(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DiagnosisContent;
    use crate::core::types::Category::{A, B, C, D};

    fn parts() -> (QuestionBank, ResultCatalog) {
        DiagnosisContent::bundled().into_parts()
    }

    #[test]
    fn parse_accepts_commas_and_whitespace() {
        assert_eq!(parse_answers("A,B,C,D,A").expect("parse"), vec![A, B, C, D, A]);
        assert_eq!(parse_answers("a b\tc").expect("parse"), vec![A, B, C]);
        assert!(parse_answers("A,X").is_err());
        assert!(parse_answers("  ").is_err());
    }

    #[test]
    fn scenario_all_a_is_relax() {
        let (bank, catalog) = parts();
        let outcome = simulate(&bank, &catalog, &[A, A, A, A, A]).expect("simulate");
        assert_eq!(outcome.result, ResultId::Relax);
        assert_eq!(outcome.course, "森の深眠コース 90分");
        assert_eq!(outcome.tally.a, 5);
    }

    #[test]
    fn scenario_double_d_is_premium() {
        let (bank, catalog) = parts();
        let outcome = simulate(&bank, &catalog, &[D, D, A, A, A]).expect("simulate");
        assert_eq!(outcome.result, ResultId::Premium);
    }

    #[test]
    fn scenario_dominant_b_is_hair() {
        let (bank, catalog) = parts();
        let outcome = simulate(&bank, &catalog, &[B, B, B, A, A]).expect("simulate");
        assert_eq!(outcome.result, ResultId::Hair);
    }

    #[test]
    fn scenario_dominant_c_is_scalp() {
        let (bank, catalog) = parts();
        let outcome = simulate(&bank, &catalog, &[C, C, C, B, B]).expect("simulate");
        assert_eq!(outcome.result, ResultId::Scalp);
    }

    #[test]
    fn scenario_relative_a_dominance_is_relax() {
        let (bank, catalog) = parts();
        let outcome = simulate(&bank, &catalog, &[A, B, C, D, A]).expect("simulate");
        assert_eq!(outcome.result, ResultId::Relax);
    }

    #[test]
    fn scenario_b_c_tie_is_balance() {
        let (bank, catalog) = parts();
        let outcome = simulate(&bank, &catalog, &[A, B, B, C, C]).expect("simulate");
        assert_eq!(outcome.result, ResultId::Balance);
    }

    #[test]
    fn wrong_length_sequence_is_rejected() {
        let (bank, catalog) = parts();
        let err = simulate(&bank, &catalog, &[A, A]).expect_err("expected error");
        assert!(err.to_string().contains("expected 5 answers"));
    }

    /// Question 3 offers no D in the bundled content; the error names the
    /// failing position.
    #[test]
    fn unoffered_category_is_rejected_with_position() {
        let (bank, catalog) = parts();
        let err = simulate(&bank, &catalog, &[A, A, D, A, A]).expect_err("expected error");
        assert!(err.to_string().contains("answer 3 of 5"));
    }
}
