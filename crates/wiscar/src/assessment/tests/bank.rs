use super::common::*;
use crate::assessment::bank::{BankError, BankIssue, QuestionBank};
use crate::assessment::domain::{
    AnswerSheet, AssessmentError, QuestionBody, QuestionCategory, QuestionId, QuestionKind,
};
use crate::assessment::scoring::{DimensionWeights, SCENARIO_VALUE_CEILING};

#[test]
fn standard_bank_passes_its_own_lint() {
    let bank = QuestionBank::standard();
    assert_eq!(bank.lint(), Vec::new());
    assert_eq!(bank.len(), 21);
}

#[test]
fn standard_bank_lists_best_choice_last() {
    for question in QuestionBank::standard().questions() {
        if let QuestionBody::MultipleChoice { options, preferred } = &question.body {
            assert_eq!(
                *preferred,
                Some(options.len() - 1),
                "{} should prefer its last option",
                question.id
            );
        }
    }
}

#[test]
fn standard_scenario_values_stay_on_the_five_point_scale() {
    for question in QuestionBank::standard().questions() {
        if let QuestionBody::Scenario { scenario } = &question.body {
            for choice in &scenario.choices {
                assert!(
                    (0..=SCENARIO_VALUE_CEILING).contains(&choice.value),
                    "{} has value {}",
                    question.id,
                    choice.value
                );
            }
        }
    }
}

#[test]
fn standard_bank_covers_every_category_and_kind() {
    let bank = QuestionBank::standard();
    for category in QuestionCategory::ordered() {
        assert!(
            !bank.questions_for_category(category).is_empty(),
            "{}",
            category.label()
        );
    }
    for kind in [
        QuestionKind::Likert,
        QuestionKind::MultipleChoice,
        QuestionKind::Scenario,
    ] {
        assert!(bank.questions().iter().any(|question| question.kind() == kind));
    }
}

#[test]
fn unweighted_subcategories_are_reported() {
    let bank = QuestionBank::standard();
    let unweighted = bank.unweighted_subcategories(&DimensionWeights::standard());
    assert_eq!(unweighted, vec!["agreeableness", "conscientiousness"]);
}

#[test]
fn lint_flags_structural_problems() {
    let mut blank_prompt = likert_question("blank", "grit", 1, 5);
    blank_prompt.prompt = "  ".to_string();

    let mut misplaced = choice_question("misplaced", "tools", 3);
    if let QuestionBody::MultipleChoice { preferred, .. } = &mut misplaced.body {
        *preferred = Some(0);
    }

    let issues = QuestionBank::new(vec![
        likert_question("dup", "grit", 1, 5),
        likert_question("dup", "grit", 1, 5),
        likert_question("", "grit", 1, 5),
        blank_prompt,
        likert_question("flat", "grit", 4, 4),
        choice_question("lonely", "tools", 1),
        misplaced,
        scenario_question("empty", "work-preference", &[]),
        scenario_question("loud", "work-preference", &[2, 8]),
    ])
    .err()
    .map(|error| match error {
        BankError::Invalid(issues) => issues,
        other => panic!("unexpected error {other}"),
    })
    .expect("bank rejected");

    assert_eq!(
        issues,
        vec![
            BankIssue::DuplicateId(QuestionId::from("dup")),
            BankIssue::EmptyId,
            BankIssue::EmptyPrompt(QuestionId::from("blank")),
            BankIssue::DegenerateScale {
                question: QuestionId::from("flat"),
                min: 4,
                max: 4,
            },
            BankIssue::TooFewOptions(QuestionId::from("lonely")),
            BankIssue::PreferredOptionNotLast {
                question: QuestionId::from("misplaced"),
                preferred: 0,
                option_count: 3,
            },
            BankIssue::NoScenarioChoices(QuestionId::from("empty")),
            BankIssue::ScenarioValueOutOfScale {
                question: QuestionId::from("loud"),
                value: 8,
            },
        ]
    );
}

#[test]
fn from_json_reads_the_interchange_format() {
    let raw = r#"[
        {
            "id": "grit_1",
            "category": "psychometric",
            "subcategory": "grit",
            "question": "I finish what I start.",
            "type": "likert",
            "likertScale": { "min": 1, "max": 7, "minLabel": "Never", "maxLabel": "Always" }
        },
        {
            "id": "tools_1",
            "category": "technical",
            "subcategory": "tools",
            "question": "Pick a prototyping tool.",
            "type": "multiple-choice",
            "options": ["Excel", "Figma"],
            "preferredOption": 1
        },
        {
            "id": "work_1",
            "category": "aptitude",
            "question": "A deadline moves up.",
            "type": "scenario",
            "scenario": {
                "context": "Launch is next week.",
                "choices": [{ "text": "Re-plan", "value": 5 }, { "text": "Panic", "value": 0 }]
            }
        }
    ]"#;

    let bank = QuestionBank::from_json(raw).expect("valid bank");
    assert_eq!(bank.len(), 3);
    assert_eq!(bank.get(0).map(|question| question.kind()), Some(QuestionKind::Likert));
    assert_eq!(
        bank.find(&QuestionId::from("work_1"))
            .and_then(|question| question.subcategory()),
        None
    );

    let round_trip = serde_json::to_value(bank.questions()).expect("serialize");
    assert_eq!(round_trip[1]["type"], "multiple-choice");
    assert_eq!(round_trip[1]["preferredOption"], 1);
    assert_eq!(round_trip[0]["likertScale"]["max"], 7);
}

#[test]
fn empty_banks_are_rejected() {
    assert!(matches!(
        QuestionBank::new(Vec::new()),
        Err(BankError::Invalid(issues)) if issues == vec![BankIssue::Empty]
    ));
    assert!(matches!(
        QuestionBank::from_json("[]"),
        Err(BankError::Invalid(_))
    ));
}

#[test]
fn from_json_reports_malformed_documents() {
    assert!(matches!(
        QuestionBank::from_json("{ not json"),
        Err(BankError::Json(_))
    ));
}

#[test]
fn from_path_reports_missing_files() {
    let error = QuestionBank::from_path("/definitely/not/a/bank.json").expect_err("missing");
    assert!(matches!(error, BankError::Io(_)));
}

#[test]
fn answer_sheet_stops_at_the_first_invalid_entry() {
    let bank = small_bank();
    let sheet = bank
        .answer_sheet([("grit_1", 4), ("tools_1", 0), ("work_1", 5)])
        .expect("valid answers");
    assert_eq!(sheet.len(), 3);

    let error = bank
        .answer_sheet([("grit_1", 4), ("work_1", 4)])
        .expect_err("4 is not a declared scenario value");
    assert!(matches!(
        error,
        AssessmentError::InvalidScenarioValue { value: 4, .. }
    ));
}

#[test]
fn record_rejects_unknown_ids() {
    let bank = small_bank();
    let mut sheet = AnswerSheet::new();
    let error = bank
        .record(&mut sheet, &QuestionId::from("ghost"), 1)
        .expect_err("unknown");
    assert!(matches!(error, AssessmentError::UnknownQuestion(_)));
    assert!(sheet.is_empty());
}
