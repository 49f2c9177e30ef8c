use super::super::scoring::{Recommendation, Scorecard, WiscarDimension};
use super::views::ReportInsights;

const ENTRY_LEVEL_PATH: &str = "Entry-level Design Roles";
const DEVELOPMENT_FLOOR: u32 = 60;

pub(crate) fn generate_insights(scorecard: &Scorecard) -> ReportInsights {
    let scores = &scorecard.wiscar;

    let summary = match scorecard.overall_score {
        80.. => "Excellent! You show strong potential across all areas. UI/UX Design appears to be a natural fit for your interests and abilities.",
        70..=79 => "Very promising! You have solid foundations with some areas to develop. With focused learning, you could excel in UI/UX Design.",
        60..=69 => "Good potential with room for growth. Consider developing your weaker areas while building on your strengths.",
        50..=59 => "Mixed signals. You have some relevant strengths, but significant skill development would be needed.",
        _ => "UI/UX Design may not be the best fit currently. Consider exploring related fields or developing foundational skills first.",
    };

    let mut career_paths = Vec::new();
    if scores.skill >= 70 && scores.cognitive >= 70 {
        career_paths.push("UX Designer");
    }
    if scores.interest >= 80 {
        career_paths.push("Product Designer");
    }
    if scores.real_world_alignment >= 70 {
        career_paths.push("UI Designer");
    }
    if scores.ability_to_learn >= 75 {
        career_paths.push("UX Researcher");
    }
    if career_paths.is_empty() {
        career_paths.push(ENTRY_LEVEL_PATH);
    }

    let mut next_steps = Vec::new();
    let mut areas_to_develop = Vec::new();
    match scorecard.recommendation {
        Recommendation::Yes => {
            next_steps.extend([
                "Start with Figma basics and design fundamentals",
                "Take a UX research course to strengthen user empathy",
                "Build your first portfolio project",
                "Join design communities and follow industry leaders",
            ]);
        }
        Recommendation::Maybe => {
            if scores.skill < DEVELOPMENT_FLOOR {
                areas_to_develop.push("Strengthen technical design skills and tool knowledge");
            }
            if scores.cognitive < DEVELOPMENT_FLOOR {
                areas_to_develop.push("Practice analytical thinking and problem-solving");
            }
            if scores.interest < DEVELOPMENT_FLOOR {
                areas_to_develop.push("Explore design more deeply to build genuine interest");
            }
        }
        Recommendation::No => {}
    }

    // First dimension wins ties so the output is stable.
    let ranked = WiscarDimension::ordered();
    let strongest = ranked
        .iter()
        .copied()
        .reduce(|best, dimension| {
            if scores.get(dimension) > scores.get(best) {
                dimension
            } else {
                best
            }
        });
    let weakest = ranked
        .iter()
        .copied()
        .reduce(|worst, dimension| {
            if scores.get(dimension) < scores.get(worst) {
                dimension
            } else {
                worst
            }
        });

    let spread = strongest
        .zip(weakest)
        .map(|(high, low)| scores.get(high) - scores.get(low))
        .unwrap_or(0);

    ReportInsights {
        summary,
        career_paths,
        next_steps,
        areas_to_develop,
        strongest_dimension: strongest.filter(|_| spread > 0).map(WiscarDimension::label),
        weakest_dimension: weakest.filter(|_| spread > 0).map(WiscarDimension::label),
    }
}
