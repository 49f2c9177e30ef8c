use super::bank::QuestionBank;
use super::domain::{AnswerSheet, AnswerValue, AssessmentError, Question, QuestionId};
use super::scoring::{Scorecard, ScoringEngine};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPhase {
    Intro,
    InProgress,
    Complete,
}

impl SessionPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }
}

/// What a navigation call did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { index: usize },
    Completed,
    Unchanged,
}

/// One respondent's attempt: cursor, answers, and phase, under a single owner.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    phase: SessionPhase,
    cursor: usize,
    answers: AnswerSheet,
}

impl AssessmentSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            phase: SessionPhase::Intro,
            cursor: 0,
            answers: AnswerSheet::new(),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn start(&mut self) -> Transition {
        if self.phase != SessionPhase::Intro {
            return Transition::Unchanged;
        }
        self.phase = SessionPhase::InProgress;
        Transition::Moved { index: self.cursor }
    }

    /// Validates and records an answer for any question in the bank.
    pub fn answer(&mut self, id: &QuestionId, raw: i64) -> Result<AnswerValue, AssessmentError> {
        if self.phase != SessionPhase::InProgress {
            return Err(AssessmentError::NotInProgress(self.phase.label()));
        }
        self.bank.record(&mut self.answers, id, raw)
    }

    /// Records an answer for the question under the cursor.
    pub fn answer_current(&mut self, raw: i64) -> Result<AnswerValue, AssessmentError> {
        if self.phase != SessionPhase::InProgress {
            return Err(AssessmentError::NotInProgress(self.phase.label()));
        }
        let id = match self.current_question() {
            Some(question) => question.id.clone(),
            None => return Err(AssessmentError::NotInProgress(self.phase.label())),
        };
        self.answer(&id, raw)
    }

    /// Withdraws an answer; like recording, only allowed while in progress.
    pub fn clear_answer(
        &mut self,
        id: &QuestionId,
    ) -> Result<Option<AnswerValue>, AssessmentError> {
        if self.phase != SessionPhase::InProgress {
            return Err(AssessmentError::NotInProgress(self.phase.label()));
        }
        Ok(self.answers.remove(id))
    }

    /// Moves to the next question; stepping past the last one completes the
    /// session. Further calls after completion are no-ops.
    pub fn advance(&mut self) -> Transition {
        if self.phase != SessionPhase::InProgress {
            return Transition::Unchanged;
        }

        let next = self.cursor + 1;
        if next >= self.bank.len() {
            return self.finish();
        }

        self.cursor = next;
        Transition::Moved { index: next }
    }

    pub fn retreat(&mut self) -> Transition {
        if self.phase != SessionPhase::InProgress || self.cursor == 0 {
            return Transition::Unchanged;
        }
        self.cursor -= 1;
        Transition::Moved { index: self.cursor }
    }

    /// Ends the attempt early, leaving unanswered questions out of the score.
    pub fn complete(&mut self) -> Transition {
        match self.phase {
            SessionPhase::Complete => Transition::Unchanged,
            SessionPhase::Intro | SessionPhase::InProgress => self.finish(),
        }
    }

    pub fn reset(&mut self) {
        self.phase = SessionPhase::Intro;
        self.cursor = 0;
        self.answers.clear();
        info!("assessment session reset");
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::InProgress => self.bank.get(self.cursor),
            SessionPhase::Intro | SessionPhase::Complete => None,
        }
    }

    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.answers.get(&question.id))
    }

    /// Whether the "next" control should be enabled.
    pub fn can_proceed(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Percent of the way through the questionnaire.
    pub fn progress(&self) -> f64 {
        match self.phase {
            SessionPhase::Intro => 0.0,
            SessionPhase::Complete => 100.0,
            SessionPhase::InProgress => {
                if self.bank.is_empty() {
                    0.0
                } else {
                    self.cursor as f64 / self.bank.len() as f64 * 100.0
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// Recomputes the result from the answers recorded so far.
    pub fn scorecard(&self, engine: &ScoringEngine) -> Scorecard {
        engine.score(&self.bank, &self.answers)
    }

    fn finish(&mut self) -> Transition {
        self.phase = SessionPhase::Complete;
        info!(
            answered = self.answers.len(),
            total = self.bank.len(),
            "assessment session complete"
        );
        Transition::Completed
    }
}
