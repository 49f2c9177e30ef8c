use super::super::bank::QuestionBank;
use super::super::domain::AnswerSheet;
use super::config::{OverallWeights, ScoringConfig, WiscarDimension};
use super::normalize::normalized_score;
use super::WiscarScore;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Default, Clone, Copy)]
struct RunningMean {
    mean: f64,
    count: usize,
}

impl RunningMean {
    // Incremental form keeps the mean of identical samples bit-exact.
    fn push(&mut self, sample: f64) {
        self.count += 1;
        self.mean += (sample - self.mean) / self.count as f64;
    }
}

/// Mean normalized score per subcategory over the answered, scorable questions.
///
/// Subcategories without a single answered question are absent from the map.
pub(crate) fn subcategory_averages(
    bank: &QuestionBank,
    answers: &AnswerSheet,
) -> BTreeMap<String, f64> {
    let mut buckets: BTreeMap<String, RunningMean> = BTreeMap::new();

    for question in bank.questions() {
        let Some(subcategory) = question.subcategory() else {
            continue;
        };
        let Some(answer) = answers.get(&question.id) else {
            continue;
        };

        match normalized_score(question, answer) {
            Some(score) => buckets
                .entry(subcategory.to_owned())
                .or_default()
                .push(score),
            None => warn!(
                question = %question.id,
                kind = question.kind().label(),
                "answer does not fit question payload; skipped"
            ),
        }
    }

    buckets
        .into_iter()
        .map(|(subcategory, bucket)| (subcategory, bucket.mean))
        .collect()
}

pub(crate) fn compose_dimension(
    dimension: WiscarDimension,
    averages: &BTreeMap<String, f64>,
    config: &ScoringConfig,
) -> u32 {
    let weighted: f64 = config
        .dimension_weights
        .row(dimension)
        .map(|(subcategory, weight)| {
            let average = averages
                .get(subcategory)
                .copied()
                .unwrap_or(config.default_subcategory_score);
            average * weight
        })
        .sum();

    // Not clamped: rows summing above one may legitimately exceed 100.
    weighted.round().max(0.0) as u32
}

pub(crate) fn compose_dimensions(
    averages: &BTreeMap<String, f64>,
    config: &ScoringConfig,
) -> WiscarScore {
    let mut score = WiscarScore::default();
    for dimension in WiscarDimension::ordered() {
        score.set(dimension, compose_dimension(dimension, averages, config));
    }
    score
}

/// Integer weighted sum, rounded half up.
pub(crate) fn overall_score(scores: &WiscarScore, weights: &OverallWeights) -> u32 {
    let weighted: u64 = WiscarDimension::ordered()
        .into_iter()
        .map(|dimension| u64::from(scores.get(dimension)) * u64::from(weights.percent(dimension)))
        .sum();

    let total = u64::from(weights.total_percent().max(1));
    let rounded = (weighted * 2 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
