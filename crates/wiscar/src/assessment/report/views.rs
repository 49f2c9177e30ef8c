use super::super::scoring::{Recommendation, WiscarDimension};
use serde::Serialize;

/// Qualitative band for a single dimension score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Developing,
    NeedsWork,
}

impl ScoreBand {
    pub const fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Developing
        } else {
            Self::NeedsWork
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Developing => "Developing",
            Self::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionEntry {
    pub dimension: WiscarDimension,
    pub label: &'static str,
    pub score: u32,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportInsights {
    pub summary: &'static str,
    pub career_paths: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub areas_to_develop: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest_dimension: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest_dimension: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub verdict: Recommendation,
    pub label: &'static str,
    pub headline: &'static str,
}

impl From<Recommendation> for RecommendationView {
    fn from(verdict: Recommendation) -> Self {
        Self {
            verdict,
            label: verdict.label(),
            headline: verdict.headline(),
        }
    }
}
