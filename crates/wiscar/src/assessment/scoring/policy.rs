use super::config::RecommendationThresholds;
use serde::{Deserialize, Serialize};

/// Coarse verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Classifies with the standard 70 / 50 cut-offs.
    pub fn from_score(score: u32) -> Self {
        Self::classify(score, &RecommendationThresholds::standard())
    }

    pub fn classify(score: u32, thresholds: &RecommendationThresholds) -> Self {
        if score >= thresholds.yes {
            Recommendation::Yes
        } else if score >= thresholds.maybe {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "Yes",
            Recommendation::Maybe => "Maybe",
            Recommendation::No => "No",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Recommendation::Yes => "Start Learning!",
            Recommendation::Maybe => "Proceed with Caution",
            Recommendation::No => "Consider Alternatives",
        }
    }
}
