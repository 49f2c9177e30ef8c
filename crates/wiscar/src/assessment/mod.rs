//! Question bank, answer validation, WISCAR scoring, and the respondent session.

pub mod bank;
pub mod domain;
pub mod report;
pub mod router;
pub mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use bank::{BankError, BankIssue, QuestionBank};
pub use domain::{
    AnswerSheet, AnswerValue, AssessmentError, LikertScale, Question, QuestionBody,
    QuestionCategory, QuestionId, QuestionKind, ScenarioBody, ScenarioChoice,
};
pub use report::ScoreReport;
pub use router::{assessment_router, AssessmentState};
pub use scoring::{
    Recommendation, Scorecard, ScoringConfig, ScoringConfigError, ScoringEngine, WiscarDimension,
    WiscarScore,
};
pub use session::{AssessmentSession, SessionPhase, Transition};
