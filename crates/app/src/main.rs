//! `exam` command-line front end: browse the question bank and take timed tests.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod render;

#[derive(Parser)]
#[command(name = "exam", version, about = "Timed multiple-choice tests over a question bank")]
struct Cli {
    /// Question bank JSON file
    #[arg(
        long,
        global = true,
        env = "EXAM_BANK_PATH",
        default_value = "data/question_bank.json"
    )]
    bank: PathBuf,

    /// Refuse to load a bank with malformed questions
    #[arg(long, global = true, env = "EXAM_STRICT_BANK")]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List subjects that have questions
    Subjects,

    /// List topics with authors and question counts
    Topics {
        /// Subject name, or "All"
        #[arg(long, default_value = "All")]
        subject: String,
    },

    /// List reference books
    Books,

    /// Print questions for study
    Read {
        /// Subject name, or "All"
        #[arg(long, default_value = "All")]
        subject: String,

        /// Topic name, or "All"
        #[arg(long, default_value = "All")]
        topic: String,

        /// Mark the correct option of each question
        #[arg(long)]
        show_answers: bool,
    },

    /// Take a timed test in the terminal
    Test {
        /// Subject name, or "All"
        #[arg(long, default_value = "All")]
        subject: String,

        /// Topic name, or "All"
        #[arg(long, default_value = "All")]
        topic: String,

        /// Number of questions (default: min(10, available))
        #[arg(long)]
        questions: Option<u32>,

        /// Timer length in minutes (default: min(10, available))
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Report malformed questions in the bank
    Check,

    /// Write the built-in demo bank to a file
    Seed {
        /// Destination file (defaults to --bank)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let source = commands::BankSource::new(cli.bank, cli.strict);

    let result = match cli.command {
        Commands::Subjects => commands::catalog::subjects(&source).await,
        Commands::Topics { subject } => commands::catalog::topics(&source, &subject).await,
        Commands::Books => commands::catalog::books(&source).await,
        Commands::Read {
            subject,
            topic,
            show_answers,
        } => commands::read::execute(&source, &subject, &topic, show_answers).await,
        Commands::Test {
            subject,
            topic,
            questions,
            minutes,
        } => commands::test::execute(&source, &subject, &topic, questions, minutes).await,
        Commands::Check => commands::check::execute(&source).await,
        Commands::Seed { out } => commands::seed::execute(&source, out).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
