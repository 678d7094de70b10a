use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use abacus::app::{App, DrillRequest};
use abacus::config::Config;

#[derive(Parser)]
#[command(name = "abacus", version, about = "Terminal arithmetic drills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for reproducible questions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "abacus=debug" (RUST_LOG wins when set)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write diagnostics to this file instead of stderr
    #[arg(short, long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Times tables against multiplicands 1 to 12
    Timestable {
        /// Tables to drill: numbers or inclusive ranges such as 4-6
        #[arg(required = true)]
        tables: Vec<String>,

        /// Shuffle the question order
        #[arg(long)]
        random: bool,
    },

    /// Multiplication with one upper bound per operand
    Mult {
        /// Exclusive upper bound for each operand position (missing ones use 10)
        #[arg(required = true)]
        max_vals: Vec<u32>,

        /// Number of questions
        #[arg(long)]
        questions: Option<usize>,

        /// Number of operands per question
        #[arg(long)]
        operands: Option<usize>,
    },

    /// Running sums and differences
    Plus {
        /// Number of questions
        #[arg(long)]
        questions: Option<usize>,

        /// Number of operands per question
        #[arg(long)]
        operands: Option<i64>,

        /// Exclusive bound on every running total
        #[arg(long)]
        max: Option<i64>,

        /// Ask a missed question again until it is answered correctly
        #[arg(long)]
        repeat: bool,

        /// File that records wrong attempts (overwritten each run)
        #[arg(long)]
        wrong_log: Option<PathBuf>,
    },

    /// Division with quotient and remainder
    Div {
        /// Exclusive upper bound for the dividend
        max_val: u32,

        /// Inclusive lower bound for the dividend
        min_val: u32,

        /// Number of questions
        #[arg(long)]
        questions: Option<usize>,
    },
}

impl Commands {
    fn into_request(self) -> DrillRequest {
        match self {
            Commands::Timestable { tables, random } => DrillRequest::TimesTable { tables, random },
            Commands::Mult {
                max_vals,
                questions,
                operands,
            } => DrillRequest::Multiplication {
                max_vals,
                questions,
                operands,
            },
            Commands::Plus {
                questions,
                operands,
                max,
                repeat,
                wrong_log,
            } => DrillRequest::RunningSum {
                questions,
                operands,
                max_operand: max,
                repeat,
                wrong_log,
            },
            Commands::Div {
                max_val,
                min_val,
                questions,
            } => DrillRequest::Division {
                max_val,
                min_val,
                questions,
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(level, cli.log.as_deref())?;

    let request = cli.command.into_request();
    let mut app = App::new(config, cli.seed);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let result = app.run(&request, &mut input, &mut output)?;

    writeln!(output)?;
    writeln!(output, "{result}")?;
    Ok(())
}

fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("bad log level '{level}'"))?,
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
