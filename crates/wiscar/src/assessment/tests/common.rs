use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{
    AnswerSheet, LikertScale, Question, QuestionBody, QuestionCategory, QuestionId, ScenarioBody,
    ScenarioChoice,
};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::AssessmentState;

pub(super) fn standard_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn state() -> AssessmentState {
    AssessmentState::new(QuestionBank::standard(), ScoringEngine::standard())
}

/// Raw answer that maximizes a question's normalized score, scenarios excluded.
pub(super) fn max_raw(question: &Question) -> Option<i64> {
    match &question.body {
        QuestionBody::Likert { scale } => Some(i64::from(scale.max)),
        QuestionBody::MultipleChoice { options, .. } => Some(options.len() as i64 - 1),
        QuestionBody::Scenario { .. } => None,
    }
}

/// Every likert at its maximum and every multiple-choice at the last option.
pub(super) fn max_answers(bank: &QuestionBank) -> AnswerSheet {
    let raw = bank
        .questions()
        .iter()
        .filter_map(|question| max_raw(question).map(|value| (question.id.0.clone(), value)));
    bank.answer_sheet(raw).expect("maximal answers are valid")
}

pub(super) fn likert_question(id: &str, subcategory: &str, min: i32, max: i32) -> Question {
    Question {
        id: QuestionId::from(id),
        category: QuestionCategory::Psychometric,
        subcategory: Some(subcategory.to_string()),
        prompt: format!("Likert prompt for {id}"),
        body: QuestionBody::Likert {
            scale: LikertScale {
                min,
                max,
                min_label: "Low".to_string(),
                max_label: "High".to_string(),
            },
        },
    }
}

pub(super) fn choice_question(id: &str, subcategory: &str, option_count: usize) -> Question {
    Question {
        id: QuestionId::from(id),
        category: QuestionCategory::Technical,
        subcategory: Some(subcategory.to_string()),
        prompt: format!("Choice prompt for {id}"),
        body: QuestionBody::MultipleChoice {
            options: (0..option_count)
                .map(|index| format!("Option {index}"))
                .collect(),
            preferred: option_count.checked_sub(1),
        },
    }
}

pub(super) fn scenario_question(id: &str, subcategory: &str, values: &[i32]) -> Question {
    Question {
        id: QuestionId::from(id),
        category: QuestionCategory::Aptitude,
        subcategory: Some(subcategory.to_string()),
        prompt: format!("Scenario prompt for {id}"),
        body: QuestionBody::Scenario {
            scenario: ScenarioBody {
                context: "A stakeholder asks for a redesign.".to_string(),
                choices: values
                    .iter()
                    .map(|value| ScenarioChoice {
                        text: format!("Choice worth {value}"),
                        value: *value,
                    })
                    .collect(),
            },
        },
    }
}

/// Three questions: one of each kind, on weighted subcategories.
pub(super) fn small_bank() -> QuestionBank {
    QuestionBank::new(vec![
        likert_question("grit_1", "grit", 1, 5),
        choice_question("tools_1", "tools", 4),
        scenario_question("work_1", "work-preference", &[1, 3, 5]),
    ])
    .expect("small bank is valid")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
