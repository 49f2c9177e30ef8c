use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Neutral score substituted for subcategories nobody answered.
pub const DEFAULT_SUBCATEGORY_SCORE: f64 = 60.0;

/// The six composite WISCAR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorldAlignment,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::AbilityToLearn,
            Self::RealWorldAlignment,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::AbilityToLearn => "abilityToLearn",
            Self::RealWorldAlignment => "realWorldAlignment",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will (Motivation)",
            Self::Interest => "Interest",
            Self::Skill => "Current Skills",
            Self::Cognitive => "Cognitive Readiness",
            Self::AbilityToLearn => "Learning Ability",
            Self::RealWorldAlignment => "Career Alignment",
        }
    }
}

/// Per-dimension subcategory weights. Rows are hand-tuned and are not
/// required to sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionWeights {
    rows: BTreeMap<WiscarDimension, BTreeMap<String, f64>>,
}

impl DimensionWeights {
    pub fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    pub fn standard() -> Self {
        let mut weights = Self::empty();
        let table: [(WiscarDimension, &[(&str, f64)]); 6] = [
            (
                WiscarDimension::Will,
                &[("grit", 0.4), ("growth-mindset", 0.3), ("motivation", 0.3)],
            ),
            (
                WiscarDimension::Interest,
                &[("interest", 0.7), ("riasec", 0.3)],
            ),
            (
                WiscarDimension::Skill,
                &[
                    ("domain-knowledge", 0.5),
                    ("tools", 0.3),
                    ("problem-solving", 0.2),
                ],
            ),
            (
                WiscarDimension::Cognitive,
                &[
                    ("logical-reasoning", 0.3),
                    ("pattern-recognition", 0.3),
                    ("analytical-thinking", 0.4),
                ],
            ),
            (
                WiscarDimension::AbilityToLearn,
                &[("growth-mindset", 0.4), ("openness", 0.3), ("curiosity", 0.3)],
            ),
            (
                WiscarDimension::RealWorldAlignment,
                &[
                    ("work-preference", 0.5),
                    ("working-style", 0.3),
                    ("scenario-performance", 0.2),
                ],
            ),
        ];

        for (dimension, row) in table {
            for (subcategory, weight) in row {
                weights.set(dimension, subcategory, *weight);
            }
        }

        weights
    }

    pub fn set(&mut self, dimension: WiscarDimension, subcategory: &str, weight: f64) {
        self.rows
            .entry(dimension)
            .or_default()
            .insert(subcategory.to_owned(), weight);
    }

    /// Weights for one dimension; an absent row contributes nothing.
    pub fn row(&self, dimension: WiscarDimension) -> impl Iterator<Item = (&str, f64)> {
        self.rows
            .get(&dimension)
            .into_iter()
            .flat_map(|row| row.iter().map(|(key, weight)| (key.as_str(), *weight)))
    }

    pub fn row_total(&self, dimension: WiscarDimension) -> f64 {
        self.row(dimension).map(|(_, weight)| weight).sum()
    }

    /// Every subcategory referenced by at least one dimension.
    pub fn subcategories(&self) -> BTreeSet<&str> {
        self.rows
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Second-level weights over the six dimensions, in whole percent so the
/// total can be checked exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallWeights {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

impl OverallWeights {
    pub const fn standard() -> Self {
        Self {
            will: 20,
            interest: 20,
            skill: 20,
            cognitive: 15,
            ability_to_learn: 15,
            real_world_alignment: 10,
        }
    }

    pub const fn percent(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::AbilityToLearn => self.ability_to_learn,
            WiscarDimension::RealWorldAlignment => self.real_world_alignment,
        }
    }

    pub fn total_percent(&self) -> u32 {
        WiscarDimension::ordered()
            .into_iter()
            .map(|dimension| u32::from(self.percent(dimension)))
            .sum()
    }
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cut-offs for the Yes / Maybe / No recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub yes: u32,
    pub maybe: u32,
}

impl RecommendationThresholds {
    pub const fn standard() -> Self {
        Self { yes: 70, maybe: 50 }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything the scoring engine needs besides the bank and the answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub default_subcategory_score: f64,
    pub dimension_weights: DimensionWeights,
    pub overall_weights: OverallWeights,
    pub thresholds: RecommendationThresholds,
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            default_subcategory_score: DEFAULT_SUBCATEGORY_SCORE,
            dimension_weights: DimensionWeights::standard(),
            overall_weights: OverallWeights::standard(),
            thresholds: RecommendationThresholds::standard(),
        }
    }

    pub fn with_default_score(mut self, score: f64) -> Self {
        self.default_subcategory_score = score;
        self
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let default = self.default_subcategory_score;
        if !default.is_finite() || !(0.0..=100.0).contains(&default) {
            return Err(ScoringConfigError::DefaultScoreOutOfRange(default));
        }

        for dimension in WiscarDimension::ordered() {
            for (subcategory, weight) in self.dimension_weights.row(dimension) {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ScoringConfigError::InvalidWeight {
                        dimension,
                        subcategory: subcategory.to_owned(),
                        weight,
                    });
                }
            }
        }

        let total = self.overall_weights.total_percent();
        if total != 100 {
            return Err(ScoringConfigError::OverallWeightsTotal(total));
        }

        if self.thresholds.maybe > self.thresholds.yes {
            return Err(ScoringConfigError::ThresholdOrder {
                yes: self.thresholds.yes,
                maybe: self.thresholds.maybe,
            });
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("default subcategory score {0} must be a finite value within 0..=100")]
    DefaultScoreOutOfRange(f64),
    #[error("weight {weight} for {subcategory} in {dimension:?} must be finite and non-negative")]
    InvalidWeight {
        dimension: WiscarDimension,
        subcategory: String,
        weight: f64,
    },
    #[error("overall weights must total 100%, got {0}%")]
    OverallWeightsTotal(u32),
    #[error("maybe threshold {maybe} is above yes threshold {yes}")]
    ThresholdOrder { yes: u32, maybe: u32 },
}
