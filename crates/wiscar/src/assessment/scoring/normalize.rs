use super::super::domain::{AnswerValue, Question, QuestionBody};

/// Upper end of the scale scenario choice values are authored on.
pub const SCENARIO_VALUE_CEILING: i32 = 5;

/// Rescales a validated answer onto `0..=100`.
///
/// Returns `None` when the answer variant does not belong to the question's
/// kind or the question's own payload cannot produce a score (a likert scale
/// with `min >= max`, a multiple-choice question without options).
pub fn normalized_score(question: &Question, answer: &AnswerValue) -> Option<f64> {
    match (&question.body, answer) {
        (QuestionBody::Likert { scale }, AnswerValue::Scale(value)) => {
            if scale.max <= scale.min {
                return None;
            }
            let span = f64::from(scale.max) - f64::from(scale.min);
            Some((f64::from(*value) - f64::from(scale.min)) / span * 100.0)
        }
        (QuestionBody::MultipleChoice { options, .. }, AnswerValue::Choice(index)) => {
            if options.is_empty() {
                return None;
            }
            Some((*index as f64 + 1.0) / options.len() as f64 * 100.0)
        }
        (QuestionBody::Scenario { .. }, AnswerValue::Scenario(value)) => {
            Some(f64::from(*value) / f64::from(SCENARIO_VALUE_CEILING) * 100.0)
        }
        _ => None,
    }
}
