//! The diagnosis session state machine.

use crate::content::{Question, QuestionBank};
use crate::core::decision::recommend;
use crate::core::types::{Category, ResultId, SessionState, Tally};
use crate::error::EngineError;

/// One visitor's in-progress or completed diagnosis run.
///
/// The session owns the only mutable state in the engine: the current
/// question index and the running tally. It walks the bank strictly forward;
/// the sole way back is [`reset`](Self::reset). A session belongs to exactly
/// one interactive flow; hosts serving several visitors give each their own.
#[derive(Debug, Clone)]
pub struct DiagnosisSession<'a> {
    bank: &'a QuestionBank,
    index: usize,
    tally: Tally,
    outcome: Option<ResultId>,
}

impl<'a> DiagnosisSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            index: 0,
            tally: Tally::default(),
            outcome: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.outcome {
            Some(result) => SessionState::Completed { result },
            None => SessionState::Asking { index: self.index },
        }
    }

    /// The question awaiting an answer, or `None` once completed.
    ///
    /// Borrows from the bank, not the session, so the caller can keep the
    /// question while submitting the answer.
    pub fn current_question(&self) -> Option<&'a Question> {
        if self.outcome.is_some() {
            return None;
        }
        self.bank.question_at(self.index).ok()
    }

    /// Record an answer and advance.
    ///
    /// Rejects categories the current question does not offer and submissions
    /// on a completed session; the tally is untouched on any error. After the
    /// last question the decision procedure runs and the session transitions
    /// to `Completed`.
    pub fn submit_answer(&mut self, category: Category) -> Result<SessionState, EngineError> {
        if self.outcome.is_some() {
            return Err(EngineError::SessionCompleted);
        }
        let question = self.bank.question_at(self.index)?;
        if !question.offers(category) {
            return Err(EngineError::InvalidSelection {
                category,
                question: question.id,
            });
        }

        self.tally.record(category);
        if self.index + 1 < self.bank.len() {
            self.index += 1;
        } else {
            self.outcome = Some(recommend(&self.tally));
        }
        Ok(self.state())
    }

    /// The chosen course once completed.
    pub fn result(&self) -> Option<ResultId> {
        self.outcome
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Current 0-based question index (frozen at the last question once
    /// completed).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// Display fraction in `[0, 1]`: `(index + 1) / N` while asking, `1.0`
    /// once completed. Derived value for progress bars only.
    pub fn progress(&self) -> f64 {
        if self.bank.is_empty() || self.outcome.is_some() {
            return 1.0;
        }
        (self.index + 1) as f64 / self.bank.len() as f64
    }

    /// Return to the first question with a zeroed tally. Succeeds from any
    /// state.
    pub fn reset(&mut self) {
        self.index = 0;
        self.tally = Tally::default();
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bank_of, question};

    #[test]
    fn new_session_starts_at_first_question_with_zero_tally() {
        let bank = bank_of(vec![question(1, &Category::ALL), question(2, &Category::ALL)]);
        let session = DiagnosisSession::new(&bank);
        assert_eq!(session.state(), SessionState::Asking { index: 0 });
        assert_eq!(session.tally().sum(), 0);
        assert_eq!(session.current_question().map(|q| q.id), Some(1));
    }

    #[test]
    fn submit_advances_until_last_question_then_completes() {
        let bank = bank_of(vec![question(1, &Category::ALL), question(2, &Category::ALL)]);
        let mut session = DiagnosisSession::new(&bank);

        let state = session.submit_answer(Category::A).expect("first answer");
        assert_eq!(state, SessionState::Asking { index: 1 });

        let state = session.submit_answer(Category::A).expect("second answer");
        assert!(matches!(state, SessionState::Completed { .. }));
        assert_eq!(session.current_question(), None);
        assert_eq!(session.tally().sum(), 2);
    }

    /// A category missing from the current question is rejected without
    /// touching the tally or the index.
    #[test]
    fn invalid_selection_leaves_session_untouched() {
        let bank = bank_of(vec![question(1, &[Category::A, Category::B])]);
        let mut session = DiagnosisSession::new(&bank);

        let err = session.submit_answer(Category::D).expect_err("expected rejection");
        assert_eq!(
            err,
            EngineError::InvalidSelection {
                category: Category::D,
                question: 1
            }
        );
        assert_eq!(session.state(), SessionState::Asking { index: 0 });
        assert_eq!(session.tally().sum(), 0);
    }

    #[test]
    fn submit_after_completion_is_rejected() {
        let bank = bank_of(vec![question(1, &Category::ALL)]);
        let mut session = DiagnosisSession::new(&bank);
        session.submit_answer(Category::B).expect("answer");

        let err = session.submit_answer(Category::B).expect_err("expected rejection");
        assert_eq!(err, EngineError::SessionCompleted);
    }

    #[test]
    fn submit_on_empty_bank_reports_out_of_range() {
        let bank = bank_of(Vec::new());
        let mut session = DiagnosisSession::new(&bank);
        let err = session.submit_answer(Category::A).expect_err("expected error");
        assert_eq!(err, EngineError::QuestionOutOfRange { index: 0, len: 0 });
    }

    /// Reset is idempotent and works from any state, including completed.
    #[test]
    fn reset_returns_to_initial_state() {
        let bank = bank_of(vec![question(1, &Category::ALL), question(2, &Category::ALL)]);
        let mut session = DiagnosisSession::new(&bank);
        session.submit_answer(Category::D).expect("answer");
        session.submit_answer(Category::D).expect("answer");
        assert!(session.result().is_some());

        session.reset();
        assert_eq!(session.state(), SessionState::Asking { index: 0 });
        assert_eq!(session.tally().sum(), 0);
        assert_eq!(session.result(), None);

        session.reset();
        assert_eq!(session.state(), SessionState::Asking { index: 0 });
    }

    #[test]
    fn progress_is_fraction_of_questions_seen() {
        let bank = bank_of(vec![
            question(1, &Category::ALL),
            question(2, &Category::ALL),
            question(3, &Category::ALL),
            question(4, &Category::ALL),
        ]);
        let mut session = DiagnosisSession::new(&bank);
        assert_eq!(session.progress(), 0.25);
        session.submit_answer(Category::A).expect("answer");
        assert_eq!(session.progress(), 0.5);
        session.submit_answer(Category::A).expect("answer");
        session.submit_answer(Category::A).expect("answer");
        session.submit_answer(Category::A).expect("answer");
        assert_eq!(session.progress(), 1.0);
    }
}
