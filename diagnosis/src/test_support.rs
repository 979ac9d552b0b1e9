//! Test-only helpers for constructing diagnosis fixtures.

use std::path::{Path, PathBuf};

use crate::content::{DiagnosisContent, Question, QuestionBank, QuestionOption};
use crate::core::types::Category;

/// Create a deterministic question offering the given categories.
pub fn question(id: u32, categories: &[Category]) -> Question {
    Question {
        id,
        prompt: format!("question {id}"),
        options: categories
            .iter()
            .map(|category| QuestionOption {
                label: format!("option {category} for question {id}"),
                category: *category,
            })
            .collect(),
    }
}

/// Create a bank from explicit questions.
pub fn bank_of(questions: Vec<Question>) -> QuestionBank {
    QuestionBank::new(questions)
}

/// Bundled content with its questions replaced (catalog kept valid).
pub fn content_with_questions(questions: Vec<Question>) -> DiagnosisContent {
    DiagnosisContent {
        questions,
        ..DiagnosisContent::bundled()
    }
}

/// A temp directory seeded with the bundled content/config files, for tests
/// that exercise the on-disk layout.
pub struct ContentFixture {
    temp: tempfile::TempDir,
}

impl ContentFixture {
    pub fn new() -> anyhow::Result<Self> {
        let temp = tempfile::tempdir()?;
        crate::io::init::init_site(temp.path(), &crate::io::init::InitOptions { force: false })?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn diagnosis_content_path(&self) -> PathBuf {
        self.temp.path().join("content").join("diagnosis.json")
    }
}
