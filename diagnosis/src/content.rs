//! Diagnosis content: the question bank and the result catalog.
//!
//! Content is configuration: loaded once at startup and never mutated.
//! Changing it means editing `content/diagnosis.json` and redeploying, not a
//! runtime operation.

use serde::{Deserialize, Serialize};

use crate::core::types::{Category, ResultId};
use crate::error::EngineError;

/// One selectable answer. The label is display-only; the engine only reads
/// the category tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionOption {
    pub label: String,
    pub category: Category,
}

/// One quiz question with 2–4 options.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Ordinal position, 1-based, stable. Display and diagnostics only.
    pub id: u32,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// True if one of this question's options carries `category`.
    pub fn offers(&self, category: Category) -> bool {
        self.options.iter().any(|option| option.category == category)
    }
}

/// Full record for one recommended course.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultEntry {
    pub id: ResultId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub reasons: Vec<String>,
    pub image: String,
}

/// Root of `content/diagnosis.json`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosisContent {
    pub questions: Vec<Question>,
    pub results: Vec<ResultEntry>,
}

const BUNDLED_CONTENT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../content/diagnosis.json"
));

impl DiagnosisContent {
    /// Content compiled into the binary, used when no file overrides it.
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED_CONTENT).expect("bundled diagnosis content should be valid")
    }

    /// Split into the two access types the engine works with.
    pub fn into_parts(self) -> (QuestionBank, ResultCatalog) {
        (
            QuestionBank::new(self.questions),
            ResultCatalog::new(self.results),
        )
    }
}

/// Ordered, immutable sequence of questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Question at `index`, or `QuestionOutOfRange` for index ∉ `[0, len)`.
    pub fn question_at(&self, index: usize) -> Result<&Question, EngineError> {
        self.questions
            .get(index)
            .ok_or_else(|| EngineError::QuestionOutOfRange {
                index,
                len: self.questions.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Immutable catalog keyed by [`ResultId`].
///
/// A lookup miss indicates content that slipped past validation (the catalog
/// must carry exactly one entry per id), so callers treat `None` as an
/// assertion failure, not a user-facing error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCatalog {
    entries: Vec<ResultEntry>,
}

impl ResultCatalog {
    pub fn new(entries: Vec<ResultEntry>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, id: ResultId) -> Option<&ResultEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }
}
