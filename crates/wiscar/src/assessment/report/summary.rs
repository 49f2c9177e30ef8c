use super::super::scoring::{Scorecard, WiscarDimension};
use super::views::{DimensionEntry, RecommendationView, ReportInsights, ScoreBand};
use serde::Serialize;
use std::collections::BTreeMap;

/// Presentation-neutral result of a completed assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub overall_band: ScoreBand,
    pub recommendation: RecommendationView,
    pub dimensions: Vec<DimensionEntry>,
    pub insights: ReportInsights,
    pub answered: usize,
    pub total_questions: usize,
    pub subcategory_averages: BTreeMap<String, f64>,
}

impl ScoreReport {
    pub fn from_scorecard(scorecard: &Scorecard) -> Self {
        let dimensions = WiscarDimension::ordered()
            .into_iter()
            .map(|dimension| {
                let score = scorecard.wiscar.get(dimension);
                let band = ScoreBand::from_score(score);
                DimensionEntry {
                    dimension,
                    label: dimension.label(),
                    score,
                    band,
                    band_label: band.label(),
                }
            })
            .collect();

        Self {
            overall_score: scorecard.overall_score,
            overall_band: ScoreBand::from_score(scorecard.overall_score),
            recommendation: scorecard.recommendation.into(),
            dimensions,
            insights: super::generate_insights(scorecard),
            answered: scorecard.answered,
            total_questions: scorecard.total_questions,
            subcategory_averages: scorecard.subcategory_averages.clone(),
        }
    }

    pub fn dimension(&self, dimension: WiscarDimension) -> Option<&DimensionEntry> {
        self.dimensions
            .iter()
            .find(|entry| entry.dimension == dimension)
    }
}

impl From<&Scorecard> for ScoreReport {
    fn from(scorecard: &Scorecard) -> Self {
        Self::from_scorecard(scorecard)
    }
}
