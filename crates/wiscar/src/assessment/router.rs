use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bank::QuestionBank;
use super::domain::Question;
use super::report::ScoreReport;
use super::scoring::ScoringEngine;

/// Shared, read-only inputs for the assessment endpoints.
#[derive(Debug, Clone)]
pub struct AssessmentState {
    pub bank: Arc<QuestionBank>,
    pub engine: Arc<ScoringEngine>,
}

impl AssessmentState {
    pub fn new(bank: QuestionBank, engine: ScoringEngine) -> Self {
        Self {
            bank: Arc::new(bank),
            engine: Arc::new(engine),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListView<'a> {
    pub total: usize,
    pub questions: &'a [Question],
}

/// Stateless endpoints: list the bank and score a complete answer map.
pub fn assessment_router(state: AssessmentState) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .with_state(state)
}

pub(crate) async fn questions_handler(State(state): State<AssessmentState>) -> Response {
    let view = QuestionListView {
        total: state.bank.len(),
        questions: state.bank.questions(),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn score_handler(
    State(state): State<AssessmentState>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    match state.bank.answer_sheet(request.answers) {
        Ok(sheet) => {
            let scorecard = state.engine.score(&state.bank, &sheet);
            let report = ScoreReport::from_scorecard(&scorecard);
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
