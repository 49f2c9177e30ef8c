use std::collections::BTreeMap;

use super::common::*;
use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{AnswerSheet, QuestionId};
use crate::assessment::scoring::{
    DimensionWeights, OverallWeights, Recommendation, RecommendationThresholds, ScoringConfig,
    ScoringConfigError, ScoringEngine, WiscarDimension, WiscarScore,
};

#[test]
fn empty_answer_sheet_scores_every_dimension_at_the_default() {
    let bank = standard_bank();
    let scorecard = engine().score(&bank, &AnswerSheet::new());

    for dimension in WiscarDimension::ordered() {
        assert_eq!(scorecard.wiscar.get(dimension), 60, "{dimension:?}");
    }
    assert_eq!(scorecard.overall_score, 60);
    assert_eq!(scorecard.recommendation, Recommendation::Maybe);
    assert!(scorecard.subcategory_averages.is_empty());
    assert_eq!(scorecard.answered, 0);
    assert_eq!(scorecard.total_questions, bank.len());
}

#[test]
fn empty_answer_sheet_is_reproducible() {
    let bank = standard_bank();
    let first = engine().score(&bank, &AnswerSheet::new());
    let second = engine().score(&bank, &AnswerSheet::new());
    assert_eq!(first, second);
}

#[test]
fn maximal_likert_and_choice_answers_recommend_yes() {
    let bank = standard_bank();
    let answers = max_answers(&bank);
    let scorecard = engine().score(&bank, &answers);

    assert_eq!(
        scorecard.wiscar,
        WiscarScore {
            will: 88,
            interest: 100,
            skill: 92,
            cognitive: 84,
            ability_to_learn: 88,
            real_world_alignment: 60,
        }
    );
    assert_eq!(scorecard.overall_score, 88);
    assert!(scorecard.overall_score >= 70);
    assert_eq!(scorecard.recommendation, Recommendation::Yes);
}

#[test]
fn identical_scores_average_to_themselves_exactly() {
    let questions = (0..7)
        .map(|index| likert_question(&format!("grit_{index}"), "grit", 1, 4))
        .collect();
    let bank = QuestionBank::new(questions).expect("valid bank");
    let raw: Vec<(String, i64)> = (0..7).map(|index| (format!("grit_{index}"), 2)).collect();
    let answers = bank.answer_sheet(raw).expect("valid answers");

    let averages = engine().subcategory_averages(&bank, &answers);
    let expected = (2.0 - 1.0) / 3.0 * 100.0;
    assert_eq!(averages.get("grit").copied(), Some(expected));
}

#[test]
fn unanswered_and_unlabelled_questions_do_not_contribute() {
    let mut unlabelled = likert_question("loose", "grit", 1, 5);
    unlabelled.subcategory = Some("   ".to_string());
    let bank = QuestionBank::new(vec![
        likert_question("grit_1", "grit", 1, 5),
        likert_question("grit_2", "grit", 1, 5),
        unlabelled,
    ])
    .expect("valid bank");
    let answers = bank
        .answer_sheet([("grit_1", 5), ("loose", 1)])
        .expect("valid answers");

    let averages = engine().subcategory_averages(&bank, &answers);
    assert_eq!(averages.len(), 1);
    assert_eq!(averages.get("grit").copied(), Some(100.0));
}

#[test]
fn absent_subcategories_fall_back_to_the_configured_default() {
    let config = ScoringConfig::standard().with_default_score(40.0);
    let engine = ScoringEngine::new(config).expect("valid config");
    let scores = engine.dimensions(&BTreeMap::new());
    for dimension in WiscarDimension::ordered() {
        assert_eq!(scores.get(dimension), 40);
    }
}

#[test]
fn dimension_scores_are_not_clamped_above_one_hundred() {
    let mut weights = DimensionWeights::empty();
    weights.set(WiscarDimension::Will, "grit", 0.6);
    weights.set(WiscarDimension::Will, "motivation", 0.6);
    let config = ScoringConfig {
        dimension_weights: weights,
        ..ScoringConfig::standard()
    };
    let engine = ScoringEngine::new(config).expect("row totals are not constrained");

    let mut averages = BTreeMap::new();
    averages.insert("grit".to_string(), 100.0);
    averages.insert("motivation".to_string(), 100.0);
    let scores = engine.dimensions(&averages);

    assert_eq!(scores.will, 120);
    assert_eq!(scores.interest, 0, "dimension without a row contributes nothing");
}

#[test]
fn dimension_rounding_goes_to_nearest_integer() {
    let mut weights = DimensionWeights::empty();
    weights.set(WiscarDimension::Skill, "tools", 1.0);
    let config = ScoringConfig {
        dimension_weights: weights,
        ..ScoringConfig::standard()
    };
    let engine = ScoringEngine::new(config).expect("valid config");

    let mut averages = BTreeMap::new();
    averages.insert("tools".to_string(), 66.5);
    assert_eq!(engine.dimensions(&averages).skill, 67);
    averages.insert("tools".to_string(), 66.49);
    assert_eq!(engine.dimensions(&averages).skill, 66);
}

#[test]
fn overall_weights_total_exactly_one_hundred_percent() {
    let weights = OverallWeights::standard();
    assert_eq!(weights.total_percent(), 100);
    let fractional: f64 = WiscarDimension::ordered()
        .into_iter()
        .map(|dimension| f64::from(weights.percent(dimension)) / 100.0)
        .sum();
    assert!((fractional - 1.0).abs() < 1e-12);
}

#[test]
fn overall_score_ignores_dimension_evaluation_order() {
    let engine = engine();
    let values = [81, 64, 92, 47, 73, 58];

    let mut forward = WiscarScore::default();
    for (dimension, value) in WiscarDimension::ordered().into_iter().zip(values) {
        forward.set(dimension, value);
    }

    let mut backward = WiscarScore::default();
    for (dimension, value) in WiscarDimension::ordered()
        .into_iter()
        .zip(values)
        .rev()
    {
        backward.set(dimension, value);
    }

    assert_eq!(forward, backward);
    assert_eq!(engine.overall(&forward), engine.overall(&backward));
    // 16.2 + 12.8 + 18.4 + 7.05 + 10.95 + 5.8 = 71.2
    assert_eq!(engine.overall(&forward), 71);
}

#[test]
fn overall_score_rounds_half_up() {
    let scores = WiscarScore {
        will: 50,
        interest: 50,
        skill: 50,
        cognitive: 51,
        ability_to_learn: 50,
        real_world_alignment: 50,
    };
    // 50 + 0.15
    assert_eq!(engine().overall(&scores), 50);

    let half = WiscarScore {
        will: 0,
        interest: 0,
        skill: 0,
        cognitive: 0,
        ability_to_learn: 0,
        real_world_alignment: 5,
    };
    // 0.5 exactly
    assert_eq!(engine().overall(&half), 1);
}

#[test]
fn recommendation_thresholds_are_inclusive_at_the_lower_edge() {
    assert_eq!(Recommendation::from_score(69), Recommendation::Maybe);
    assert_eq!(Recommendation::from_score(70), Recommendation::Yes);
    assert_eq!(Recommendation::from_score(49), Recommendation::No);
    assert_eq!(Recommendation::from_score(50), Recommendation::Maybe);
    assert_eq!(Recommendation::from_score(0), Recommendation::No);
    assert_eq!(Recommendation::from_score(130), Recommendation::Yes);
}

#[test]
fn custom_thresholds_drive_classification() {
    let thresholds = RecommendationThresholds { yes: 80, maybe: 65 };
    assert_eq!(
        Recommendation::classify(79, &thresholds),
        Recommendation::Maybe
    );
    assert_eq!(Recommendation::classify(64, &thresholds), Recommendation::No);
}

#[test]
fn engine_rejects_invalid_configuration() {
    let bad_default = ScoringConfig::standard().with_default_score(120.0);
    assert_eq!(
        ScoringEngine::new(bad_default).expect_err("rejected"),
        ScoringConfigError::DefaultScoreOutOfRange(120.0)
    );

    let bad_total = ScoringConfig {
        overall_weights: OverallWeights {
            will: 30,
            ..OverallWeights::standard()
        },
        ..ScoringConfig::standard()
    };
    assert_eq!(
        ScoringEngine::new(bad_total).expect_err("rejected"),
        ScoringConfigError::OverallWeightsTotal(110)
    );

    let mut weights = DimensionWeights::standard();
    weights.set(WiscarDimension::Skill, "tools", -0.1);
    let negative = ScoringConfig {
        dimension_weights: weights,
        ..ScoringConfig::standard()
    };
    assert!(matches!(
        ScoringEngine::new(negative),
        Err(ScoringConfigError::InvalidWeight { .. })
    ));

    let inverted = ScoringConfig {
        thresholds: RecommendationThresholds { yes: 40, maybe: 60 },
        ..ScoringConfig::standard()
    };
    assert!(matches!(
        ScoringEngine::new(inverted),
        Err(ScoringConfigError::ThresholdOrder { .. })
    ));
}

#[test]
fn standard_weight_rows_are_hand_tuned_to_one() {
    let weights = DimensionWeights::standard();
    for dimension in WiscarDimension::ordered() {
        assert!(
            (weights.row_total(dimension) - 1.0).abs() < 1e-9,
            "{dimension:?}"
        );
    }
}

#[test]
fn scorecard_counts_only_bank_questions_as_answered() {
    let bank = small_bank();
    let mut answers = AnswerSheet::new();
    bank.record(&mut answers, &QuestionId::from("grit_1"), 5)
        .expect("valid");
    bank.record(&mut answers, &QuestionId::from("work_1"), 3)
        .expect("valid");

    let scorecard = engine().score(&bank, &answers);
    assert_eq!(scorecard.answered, 2);
    assert_eq!(scorecard.total_questions, 3);
    assert_eq!(
        scorecard.subcategory_averages.get("work-preference").copied(),
        Some(60.0)
    );
    // grit 100 * 0.4 + growth-mindset 60 * 0.3 + motivation 60 * 0.3
    assert_eq!(scorecard.wiscar.will, 76);
}
