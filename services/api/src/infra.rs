use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};
use wiscar::assessment::{AssessmentState, QuestionBank, ScoringEngine};
use wiscar::config::AssessmentConfig;
use wiscar::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolves the question bank and scoring engine the configuration asks for.
pub(crate) fn load_assessment(config: &AssessmentConfig) -> Result<AssessmentState, AppError> {
    let bank = match &config.question_bank {
        Some(path) => {
            let bank = QuestionBank::from_path(path)?;
            info!(path = %path.display(), questions = bank.len(), "loaded question bank");
            bank
        }
        None => QuestionBank::standard(),
    };

    let engine = ScoringEngine::new(config.scoring())?;

    let unweighted = bank.unweighted_subcategories(&engine.config().dimension_weights);
    if !unweighted.is_empty() {
        warn!(
            subcategories = ?unweighted,
            "question bank has subcategories no dimension weighs"
        );
    }

    Ok(AssessmentState::new(bank, engine))
}

/// Reads a JSON object of question id to raw integer answer.
pub(crate) fn read_answer_file(path: &Path) -> Result<BTreeMap<String, i64>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::AnswerFile {
        path: path.to_path_buf(),
        source,
    })
}
