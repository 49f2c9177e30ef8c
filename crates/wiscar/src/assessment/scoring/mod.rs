mod config;
mod normalize;
mod policy;
mod rules;

pub use config::{
    DimensionWeights, OverallWeights, RecommendationThresholds, ScoringConfig, ScoringConfigError,
    WiscarDimension, DEFAULT_SUBCATEGORY_SCORE,
};
pub use normalize::{normalized_score, SCENARIO_VALUE_CEILING};
pub use policy::Recommendation;

use super::bank::QuestionBank;
use super::domain::AnswerSheet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Stateless scorer applying a validated configuration to an answer sheet.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn standard() -> Self {
        Self {
            config: ScoringConfig::standard(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn subcategory_averages(
        &self,
        bank: &QuestionBank,
        answers: &AnswerSheet,
    ) -> BTreeMap<String, f64> {
        rules::subcategory_averages(bank, answers)
    }

    pub fn dimensions(&self, averages: &BTreeMap<String, f64>) -> WiscarScore {
        rules::compose_dimensions(averages, &self.config)
    }

    pub fn overall(&self, scores: &WiscarScore) -> u32 {
        rules::overall_score(scores, &self.config.overall_weights)
    }

    pub fn recommend(&self, overall_score: u32) -> Recommendation {
        Recommendation::classify(overall_score, &self.config.thresholds)
    }

    /// Full pipeline: normalize, average, compose, collapse, classify.
    pub fn score(&self, bank: &QuestionBank, answers: &AnswerSheet) -> Scorecard {
        let subcategory_averages = self.subcategory_averages(bank, answers);
        let wiscar = self.dimensions(&subcategory_averages);
        let overall_score = self.overall(&wiscar);
        let recommendation = self.recommend(overall_score);
        let answered = bank
            .questions()
            .iter()
            .filter(|question| answers.contains(&question.id))
            .count();

        debug!(
            answered,
            total = bank.len(),
            overall_score,
            recommendation = recommendation.label(),
            "scored assessment"
        );

        Scorecard {
            wiscar,
            overall_score,
            recommendation,
            subcategory_averages,
            answered,
            total_questions: bank.len(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rounded score per WISCAR dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScore {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability_to_learn: u32,
    pub real_world_alignment: u32,
}

impl WiscarScore {
    pub const fn get(&self, dimension: WiscarDimension) -> u32 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => self.real_world_alignment,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, value: u32) {
        let slot = match dimension {
            WiscarDimension::Will => &mut self.will,
            WiscarDimension::Interest => &mut self.interest,
            WiscarDimension::Skill => &mut self.skill,
            WiscarDimension::Cognitive => &mut self.cognitive,
            WiscarDimension::AbilityToLearn => &mut self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => &mut self.real_world_alignment,
        };
        *slot = value;
    }
}

/// Outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub wiscar: WiscarScore,
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub subcategory_averages: BTreeMap<String, f64>,
    pub answered: usize,
    pub total_questions: usize,
}
