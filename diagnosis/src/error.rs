//! Typed contract errors for the diagnosis engine.
//!
//! These are programming errors in the calling surface, not data errors: none
//! of them is transient and none should be retried. The presentation layer
//! only ever submits categories it displayed, so a well-behaved host never
//! observes them.

use thiserror::Error;

use crate::core::types::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Question lookup outside `[0, len)`.
    #[error("question index {index} out of range (bank has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    /// Category submitted that the current question does not offer.
    ///
    /// The tally is left untouched when this is returned.
    #[error("category {category} is not offered by question {question}")]
    InvalidSelection { category: Category, question: u32 },

    /// Answer submitted to a session that already holds a result.
    #[error("session already completed (reset to start over)")]
    SessionCompleted,
}
