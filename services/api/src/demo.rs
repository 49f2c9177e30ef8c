use crate::infra::{load_assessment, read_answer_file};
use chrono::Local;
use clap::Args;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use wiscar::assessment::{
    AssessmentSession, AssessmentState, Question, QuestionBank, QuestionBody, QuestionCategory,
    ScoreReport, Transition,
};
use wiscar::config::AppConfig;
use wiscar::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping question id to the raw integer answer
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TakeArgs {
    /// Replay answers from a JSON file instead of prompting
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
}

fn assessment_from_env() -> Result<AssessmentState, AppError> {
    let config = AppConfig::load()?;
    load_assessment(&config.assessment)
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let state = assessment_from_env()?;
    let stdout = io::stdout();
    render_questions(&state.bank, &mut stdout.lock())?;
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let state = assessment_from_env()?;
    let raw = read_answer_file(&args.answers)?;
    let sheet = state.bank.answer_sheet(raw)?;
    let scorecard = state.engine.score(&state.bank, &sheet);
    let report = ScoreReport::from_scorecard(&scorecard);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        writeln!(out, "{json}")?;
    } else {
        render_report(&report, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_take(args: TakeArgs) -> Result<(), AppError> {
    let state = assessment_from_env()?;
    let mut session = AssessmentSession::new(Arc::clone(&state.bank));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.answers {
        Some(path) => {
            let raw = read_answer_file(&path)?;
            replay_session(&mut session, &raw)?;
        }
        None => {
            let stdin = io::stdin();
            drive_session(&mut session, stdin.lock(), &mut out)?;
        }
    }

    let report = ScoreReport::from_scorecard(&session.scorecard(&state.engine));
    render_report(&report, &mut out)?;
    Ok(())
}

/// Answers every question present in `raw`, in bank order, then completes.
/// The whole map is validated up front, so unknown ids fail like `score` does.
pub(crate) fn replay_session(
    session: &mut AssessmentSession,
    raw: &BTreeMap<String, i64>,
) -> Result<(), AppError> {
    session
        .bank()
        .answer_sheet(raw.iter().map(|(id, value)| (id.clone(), *value)))?;

    session.start();
    while let Some(question) = session.current_question() {
        if let Some(value) = raw.get(question.id.as_str()).copied() {
            session.answer_current(value)?;
        }
        if session.advance() == Transition::Completed {
            break;
        }
    }
    session.complete();
    Ok(())
}

/// Line-driven session: a number answers, `n` moves on, `p` goes back,
/// `q` finishes early. End of input also finishes.
pub(crate) fn drive_session<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: R,
    out: &mut W,
) -> Result<(), AppError> {
    session.start();
    writeln!(
        out,
        "WISCAR readiness assessment: {} questions. Enter a number to answer, n for next, p for previous, q to finish.",
        session.total_questions()
    )?;

    let mut lines = input.lines();
    while let Some(question) = session.current_question() {
        render_prompt(session.cursor(), session.total_questions(), question, out)?;
        if let Some(answer) = session.current_answer() {
            writeln!(out, "  (current answer: {})", answer.raw())?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            session.complete();
            break;
        };
        let line = line?;
        match line.trim() {
            "q" => {
                session.complete();
            }
            "p" => {
                session.retreat();
            }
            "n" | "" => {
                if session.can_proceed() {
                    session.advance();
                } else {
                    writeln!(out, "Answer this question before moving on.")?;
                }
            }
            other => match other.parse::<i64>() {
                Ok(raw) => match session.answer_current(raw) {
                    Ok(_) => {
                        session.advance();
                    }
                    Err(err) => writeln!(out, "{err}")?,
                },
                Err(_) => writeln!(out, "Unrecognized input '{other}'.")?,
            },
        }
    }
    Ok(())
}

fn render_prompt<W: Write>(
    index: usize,
    total: usize,
    question: &Question,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "\n[{}/{}] {} ({})",
        index + 1,
        total,
        question.prompt,
        question.category.label()
    )?;
    match &question.body {
        QuestionBody::Likert { scale } => writeln!(
            out,
            "  {} = {} ... {} = {}",
            scale.min, scale.min_label, scale.max, scale.max_label
        ),
        QuestionBody::MultipleChoice { options, .. } => {
            for (index, option) in options.iter().enumerate() {
                writeln!(out, "  {index}) {option}")?;
            }
            Ok(())
        }
        QuestionBody::Scenario { scenario } => {
            writeln!(out, "  {}", scenario.context)?;
            for choice in &scenario.choices {
                writeln!(out, "  {}) {}", choice.value, choice.text)?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_questions<W: Write>(bank: &QuestionBank, out: &mut W) -> io::Result<()> {
    writeln!(out, "Question bank ({} questions)", bank.len())?;
    for category in QuestionCategory::ordered() {
        let questions = bank.questions_for_category(category);
        if questions.is_empty() {
            continue;
        }
        writeln!(out, "\n{} ({})", category.label(), questions.len())?;
        for question in questions {
            writeln!(
                out,
                "- {} [{}{}] {}",
                question.id,
                question.kind().label(),
                question
                    .subcategory()
                    .map(|subcategory| format!(", {subcategory}"))
                    .unwrap_or_default(),
                question.prompt
            )?;
        }
    }
    Ok(())
}

pub(crate) fn render_report<W: Write>(report: &ScoreReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nWISCAR readiness report (evaluated {})",
        Local::now().format("%Y-%m-%d %H:%M")
    )?;
    writeln!(
        out,
        "Answered {} of {} questions",
        report.answered, report.total_questions
    )?;
    writeln!(
        out,
        "Overall score: {} ({}) -> {}: {}",
        report.overall_score,
        report.overall_band.label(),
        report.recommendation.label,
        report.recommendation.headline
    )?;

    writeln!(out, "Dimensions:")?;
    for entry in &report.dimensions {
        writeln!(
            out,
            "  - {:<20} {:>3} {}",
            entry.label, entry.score, entry.band_label
        )?;
    }

    let insights = &report.insights;
    writeln!(out, "{}", insights.summary)?;
    if let (Some(strongest), Some(weakest)) =
        (insights.strongest_dimension, insights.weakest_dimension)
    {
        writeln!(out, "Strongest: {strongest} | Weakest: {weakest}")?;
    }
    writeln!(out, "Career paths: {}", insights.career_paths.join(", "))?;
    if !insights.next_steps.is_empty() {
        writeln!(out, "Next steps:")?;
        for step in &insights.next_steps {
            writeln!(out, "  - {step}")?;
        }
    }
    if !insights.areas_to_develop.is_empty() {
        writeln!(out, "Areas to develop:")?;
        for area in &insights.areas_to_develop {
            writeln!(out, "  - {area}")?;
        }
    }
    Ok(())
}
