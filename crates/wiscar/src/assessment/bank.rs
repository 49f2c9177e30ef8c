use super::domain::{
    AnswerSheet, AnswerValue, AssessmentError, LikertScale, Question, QuestionBody,
    QuestionCategory, QuestionId, ScenarioBody, ScenarioChoice,
};
use super::scoring::{DimensionWeights, SCENARIO_VALUE_CEILING};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

/// Ordered, immutable list of questions presented to the respondent.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The built-in UI/UX design readiness questionnaire.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    /// Builds a bank, refusing content that fails [`QuestionBank::lint`].
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let bank = Self { questions };
        let issues = bank.lint();
        if issues.is_empty() {
            Ok(bank)
        } else {
            Err(BankError::Invalid(issues))
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::new(questions)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn questions_for_category(&self, category: QuestionCategory) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    /// Validates `raw` against the question and stores it in `sheet`.
    pub fn record(
        &self,
        sheet: &mut AnswerSheet,
        id: &QuestionId,
        raw: i64,
    ) -> Result<AnswerValue, AssessmentError> {
        let question = self
            .find(id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(id.clone()))?;
        let value = question.validate_answer(raw)?;
        sheet.insert(question.id.clone(), value);
        Ok(value)
    }

    /// Validates a whole raw answer map, stopping at the first bad entry.
    pub fn answer_sheet<I, K>(&self, raw: I) -> Result<AnswerSheet, AssessmentError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut sheet = AnswerSheet::new();
        for (id, value) in raw {
            self.record(&mut sheet, &QuestionId(id.into()), value)?;
        }
        Ok(sheet)
    }

    /// Content checks for the bank format's structural and authoring rules.
    pub fn lint(&self) -> Vec<BankIssue> {
        let mut issues = Vec::new();
        if self.questions.is_empty() {
            issues.push(BankIssue::Empty);
        }
        let mut seen = HashSet::new();

        for question in &self.questions {
            let id = question.id.clone();
            if id.as_str().trim().is_empty() {
                issues.push(BankIssue::EmptyId);
            } else if !seen.insert(id.clone()) {
                issues.push(BankIssue::DuplicateId(id.clone()));
            }

            if question.prompt.trim().is_empty() {
                issues.push(BankIssue::EmptyPrompt(id.clone()));
            }

            match &question.body {
                QuestionBody::Likert { scale } => {
                    if scale.min >= scale.max {
                        issues.push(BankIssue::DegenerateScale {
                            question: id,
                            min: scale.min,
                            max: scale.max,
                        });
                    }
                }
                QuestionBody::MultipleChoice { options, preferred } => {
                    if options.len() < 2 {
                        issues.push(BankIssue::TooFewOptions(id.clone()));
                    }
                    if let Some(index) = preferred {
                        if *index + 1 != options.len() {
                            issues.push(BankIssue::PreferredOptionNotLast {
                                question: id,
                                preferred: *index,
                                option_count: options.len(),
                            });
                        }
                    }
                }
                QuestionBody::Scenario { scenario } => {
                    if scenario.choices.is_empty() {
                        issues.push(BankIssue::NoScenarioChoices(id.clone()));
                    }
                    for choice in &scenario.choices {
                        if !(0..=SCENARIO_VALUE_CEILING).contains(&choice.value) {
                            issues.push(BankIssue::ScenarioValueOutOfScale {
                                question: id.clone(),
                                value: choice.value,
                            });
                        }
                    }
                }
            }
        }

        issues
    }

    /// Subcategories used by questions that no dimension weighs. Answers to
    /// them are recorded but never move a score.
    pub fn unweighted_subcategories(&self, weights: &DimensionWeights) -> Vec<String> {
        let weighted = weights.subcategories();
        self.questions
            .iter()
            .filter_map(Question::subcategory)
            .filter(|subcategory| !weighted.contains(subcategory))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankIssue {
    Empty,
    EmptyId,
    DuplicateId(QuestionId),
    EmptyPrompt(QuestionId),
    DegenerateScale {
        question: QuestionId,
        min: i32,
        max: i32,
    },
    TooFewOptions(QuestionId),
    PreferredOptionNotLast {
        question: QuestionId,
        preferred: usize,
        option_count: usize,
    },
    NoScenarioChoices(QuestionId),
    ScenarioValueOutOfScale {
        question: QuestionId,
        value: i32,
    },
}

impl fmt::Display for BankIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankIssue::Empty => write!(f, "bank has no questions"),
            BankIssue::EmptyId => write!(f, "question with an empty id"),
            BankIssue::DuplicateId(id) => write!(f, "duplicate question id {id}"),
            BankIssue::EmptyPrompt(id) => write!(f, "{id} has no question text"),
            BankIssue::DegenerateScale { question, min, max } => {
                write!(f, "{question} likert scale {min}..={max} has no span")
            }
            BankIssue::TooFewOptions(id) => write!(f, "{id} needs at least two options"),
            BankIssue::PreferredOptionNotLast {
                question,
                preferred,
                option_count,
            } => write!(
                f,
                "{question} prefers option {preferred} but the best option must be last (index {})",
                option_count.saturating_sub(1)
            ),
            BankIssue::NoScenarioChoices(id) => write!(f, "{id} has no scenario choices"),
            BankIssue::ScenarioValueOutOfScale { question, value } => write!(
                f,
                "{question} scenario value {value} is outside 0..={SCENARIO_VALUE_CEILING}"
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question bank failed validation: {}", join_issues(.0))]
    Invalid(Vec<BankIssue>),
}

fn join_issues(issues: &[BankIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

const AGREEMENT: (&str, &str) = ("Strongly disagree", "Strongly agree");
const LIKE_ME: (&str, &str) = ("Not like me at all", "Very much like me");

fn likert(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    prompt: &str,
    labels: (&str, &str),
) -> Question {
    Question {
        id: QuestionId::from(id),
        category,
        subcategory: Some(subcategory.to_owned()),
        prompt: prompt.to_owned(),
        body: QuestionBody::Likert {
            scale: LikertScale {
                min: 1,
                max: 5,
                min_label: labels.0.to_owned(),
                max_label: labels.1.to_owned(),
            },
        },
    }
}

/// Options are listed worst to best; the last one is the preferred answer.
fn choice(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    prompt: &str,
    options: &[&str],
) -> Question {
    Question {
        id: QuestionId::from(id),
        category,
        subcategory: Some(subcategory.to_owned()),
        prompt: prompt.to_owned(),
        body: QuestionBody::MultipleChoice {
            options: options.iter().map(|option| option.to_string()).collect(),
            preferred: options.len().checked_sub(1),
        },
    }
}

fn scenario(
    id: &str,
    category: QuestionCategory,
    subcategory: &str,
    prompt: &str,
    context: &str,
    choices: &[(&str, i32)],
) -> Question {
    Question {
        id: QuestionId::from(id),
        category,
        subcategory: Some(subcategory.to_owned()),
        prompt: prompt.to_owned(),
        body: QuestionBody::Scenario {
            scenario: ScenarioBody {
                context: context.to_owned(),
                choices: choices
                    .iter()
                    .map(|(text, value)| ScenarioChoice {
                        text: text.to_string(),
                        value: *value,
                    })
                    .collect(),
            },
        },
    }
}

fn standard_questions() -> Vec<Question> {
    use QuestionCategory::{Aptitude, Psychometric, Technical};

    vec![
        likert(
            "interest_1",
            Psychometric,
            "interest",
            "How excited do you feel when you see a beautifully designed app or website?",
            ("Not excited at all", "Extremely excited"),
        ),
        choice(
            "interest_2",
            Psychometric,
            "interest",
            "Which activity sounds most appealing to you?",
            &[
                "Analyzing user behavior data",
                "Testing and iterating on designs",
                "Researching what users want and need",
                "Creating visual mockups and prototypes",
            ],
        ),
        likert(
            "motivation_1",
            Psychometric,
            "grit",
            "I finish whatever I begin, even when it's challenging.",
            LIKE_ME,
        ),
        likert(
            "motivation_2",
            Psychometric,
            "grit",
            "Setbacks don't discourage me. I bounce back from challenges quickly.",
            LIKE_ME,
        ),
        likert(
            "mindset_1",
            Psychometric,
            "growth-mindset",
            "I believe my design abilities can be developed through effort and practice.",
            AGREEMENT,
        ),
        likert(
            "personality_1",
            Psychometric,
            "openness",
            "I enjoy trying new creative approaches to solving problems.",
            AGREEMENT,
        ),
        likert(
            "personality_2",
            Psychometric,
            "conscientiousness",
            "I pay attention to details and like to perfect my work.",
            AGREEMENT,
        ),
        likert(
            "personality_3",
            Psychometric,
            "agreeableness",
            "I enjoy collaborating with others and value their input.",
            AGREEMENT,
        ),
        scenario(
            "personality_4",
            Psychometric,
            "working-style",
            "You're working on a design project with tight deadlines. How do you prefer to approach it?",
            "Your team has 2 weeks to redesign a mobile app's checkout flow. The stakeholders want regular updates.",
            &[
                ("Create a detailed plan first, then execute methodically", 4),
                ("Start sketching ideas immediately and iterate quickly", 3),
                ("Research similar apps first, then design based on best practices", 5),
                ("Collaborate closely with the team throughout the process", 4),
            ],
        ),
        choice(
            "technical_1",
            Technical,
            "domain-knowledge",
            "What is the primary purpose of wireframing in the design process?",
            &[
                "To create marketing materials",
                "To test the app's functionality",
                "To create the final visual design",
                "To map out the basic structure and layout before adding visual details",
            ],
        ),
        choice(
            "technical_2",
            Technical,
            "domain-knowledge",
            "Which principle is most important for good usability?",
            &[
                "Adding as many features as possible",
                "Using the latest design trends",
                "Making interfaces look beautiful",
                "Making interfaces easy to understand and use",
            ],
        ),
        choice(
            "technical_3",
            Technical,
            "domain-knowledge",
            "What does 'user-centered design' mean?",
            &[
                "Copying designs that other users have created",
                "Making designs that look appealing to users",
                "Designing based on what users say they want",
                "Putting user needs and behaviors at the center of the design process",
            ],
        ),
        choice(
            "technical_4",
            Technical,
            "tools",
            "Which tool is primarily used for creating interactive prototypes?",
            &["Excel", "Microsoft Word", "Photoshop", "Figma"],
        ),
        scenario(
            "technical_5",
            Technical,
            "problem-solving",
            "Users are struggling to find the search function on an e-commerce website. What would you do first?",
            "Analytics show that only 15% of users are using the search feature, but user interviews reveal that many want to search for specific products.",
            &[
                ("Move the search bar to a more prominent location", 3),
                ("Research how other successful e-commerce sites handle search", 5),
                ("Conduct user testing to understand the specific problems", 5),
                ("Add a search icon next to the current search bar", 2),
            ],
        ),
        choice(
            "aptitude_1",
            Aptitude,
            "logical-reasoning",
            "If App A has a 25% conversion rate and App B has a 20% conversion rate, and App A gets 1000 visitors while App B gets 1500 visitors, which app generates more conversions?",
            &[
                "Not enough information to determine",
                "They generate the same number",
                "App A (250 conversions)",
                "App B (300 conversions)",
            ],
        ),
        choice(
            "aptitude_2",
            Aptitude,
            "pattern-recognition",
            "In a user interface, which layout pattern would be most appropriate for displaying a list of equal-priority items?",
            &[
                "A horizontal scrolling banner",
                "A single prominent card at the top",
                "A hierarchical tree structure",
                "A grid layout with equal-sized cards",
            ],
        ),
        scenario(
            "aptitude_3",
            Aptitude,
            "analytical-thinking",
            "You notice that users spend an average of 3 minutes on your app's signup page, but only 40% complete the signup. What might this indicate?",
            "Your analytics show high engagement (long time spent) but low conversion on the signup page.",
            &[
                ("Users are interested but the form is too complex or confusing", 5),
                ("Users don't want to sign up for the service", 2),
                ("The page is loading too slowly", 3),
                ("Users are multitasking and not focused", 1),
            ],
        ),
        choice(
            "riasec_1",
            Psychometric,
            "riasec",
            "Which type of work environment appeals to you most?",
            &[
                "Structured environments with clear processes and goals",
                "Dynamic spaces where I can influence and lead projects",
                "Collaborative spaces where I can work closely with others",
                "Creative studios with artistic freedom and inspiration",
            ],
        ),
        choice(
            "riasec_2",
            Psychometric,
            "riasec",
            "Which activity energizes you most?",
            &[
                "Organizing and improving systems or processes",
                "Helping others achieve their goals",
                "Solving complex puzzles or analytical problems",
                "Creating something beautiful and original",
            ],
        ),
        scenario(
            "scenario_1",
            Psychometric,
            "work-preference",
            "Your design team receives conflicting feedback from different stakeholders. How do you handle this situation?",
            "Marketing wants a bold, colorful design while Engineering prefers a minimal approach. The CEO wants 'something innovative but safe.'",
            &[
                ("Research industry best practices and present data-driven recommendations", 5),
                ("Create multiple design options that satisfy different stakeholders", 4),
                ("Schedule a meeting to align everyone on user needs and business goals", 5),
                ("Design based on the highest-ranking stakeholder's preference", 2),
            ],
        ),
        scenario(
            "scenario_2",
            Psychometric,
            "work-preference",
            "You're asked to redesign a feature that you personally love but users find confusing. What's your approach?",
            "User testing shows that 70% of users struggle with a navigation feature you think is elegant and innovative.",
            &[
                ("Keep the design but add more tutorial content", 2),
                ("Completely redesign based on user feedback", 5),
                ("Make small tweaks to improve usability while keeping the concept", 3),
                ("Conduct more research to understand why users are struggling", 4),
            ],
        ),
    ]
}
