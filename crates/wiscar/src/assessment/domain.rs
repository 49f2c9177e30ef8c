use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Psychometric,
    Technical,
    Aptitude,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Aptitude]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical Knowledge",
            Self::Aptitude => "Aptitude",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    Likert,
    Scenario,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Likert => "likert",
            Self::Scenario => "scenario",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikertScale {
    pub min: i32,
    pub max: i32,
    pub min_label: String,
    pub max_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioChoice {
    pub text: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBody {
    pub context: String,
    pub choices: Vec<ScenarioChoice>,
}

/// Type-specific payload. The `type` tag doubles as the question kind.
///
/// Multiple-choice options are authored worst to best: the scorer rewards a
/// higher index with a higher normalized score. `preferredOption`, when
/// present, names the best option and must therefore be the last index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionBody {
    MultipleChoice {
        options: Vec<String>,
        #[serde(
            default,
            rename = "preferredOption",
            skip_serializing_if = "Option::is_none"
        )]
        preferred: Option<usize>,
    },
    Likert {
        #[serde(rename = "likertScale")]
        scale: LikertScale,
    },
    Scenario {
        scenario: ScenarioBody,
    },
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::Likert { .. } => QuestionKind::Likert,
            QuestionBody::Scenario { .. } => QuestionKind::Scenario,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: QuestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    /// Scoring join key; blank subcategories count as missing.
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Checks a raw integer against this question's payload.
    pub fn validate_answer(&self, raw: i64) -> Result<AnswerValue, AssessmentError> {
        match &self.body {
            QuestionBody::Likert { scale } => {
                if raw < i64::from(scale.min) || raw > i64::from(scale.max) {
                    return Err(AssessmentError::AnswerOutOfRange {
                        question: self.id.clone(),
                        min: scale.min,
                        max: scale.max,
                        value: raw,
                    });
                }
                Ok(AnswerValue::Scale(raw as i32))
            }
            QuestionBody::MultipleChoice { options, .. } => match usize::try_from(raw) {
                Ok(index) if index < options.len() => Ok(AnswerValue::Choice(index)),
                _ => Err(AssessmentError::InvalidOption {
                    question: self.id.clone(),
                    option_count: options.len(),
                    value: raw,
                }),
            },
            QuestionBody::Scenario { scenario } => scenario
                .choices
                .iter()
                .find(|choice| i64::from(choice.value) == raw)
                .map(|choice| AnswerValue::Scenario(choice.value))
                .ok_or_else(|| AssessmentError::InvalidScenarioValue {
                    question: self.id.clone(),
                    value: raw,
                }),
        }
    }
}

/// A validated answer, tagged by the kind of question it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum AnswerValue {
    Scale(i32),
    Choice(usize),
    Scenario(i32),
}

impl AnswerValue {
    /// The integer the respondent submitted.
    pub fn raw(&self) -> i64 {
        match self {
            AnswerValue::Scale(value) | AnswerValue::Scenario(value) => i64::from(*value),
            AnswerValue::Choice(index) => *index as i64,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("question {0} is not part of the question bank")]
    UnknownQuestion(QuestionId),
    #[error("answer {value} for {question} is outside the scale {min}..={max}")]
    AnswerOutOfRange {
        question: QuestionId,
        min: i32,
        max: i32,
        value: i64,
    },
    #[error("answer {value} for {question} is not an option index (question has {option_count} options)")]
    InvalidOption {
        question: QuestionId,
        option_count: usize,
        value: i64,
    },
    #[error("answer {value} for {question} does not match any scenario choice")]
    InvalidScenarioValue { question: QuestionId, value: i64 },
    #[error("answers can only be recorded while the assessment is in progress (currently {0})")]
    NotInProgress(&'static str),
}

impl AssessmentError {
    /// True when the caller supplied a bad answer rather than hitting a state problem.
    pub fn is_invalid_answer(&self) -> bool {
        !matches!(self, AssessmentError::NotInProgress(_))
    }
}

/// Answers keyed by question id. Only holds values that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    /// Overwrites any earlier answer for the same question.
    pub(crate) fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.answers.insert(id, value);
    }

    pub(crate) fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        self.answers.remove(id)
    }
}
