use crate::demo::{run_questions, run_score, run_take, ScoreArgs, TakeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wiscar::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "WISCAR Readiness Assessment",
    about = "Take, score, and serve the WISCAR career readiness assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the question bank grouped by category
    Questions,
    /// Score a JSON answer file and print the report
    Score(ScoreArgs),
    /// Take the assessment interactively on the terminal
    Take(TakeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions => run_questions(),
        Command::Score(args) => run_score(args),
        Command::Take(args) => run_take(args),
    }
}
