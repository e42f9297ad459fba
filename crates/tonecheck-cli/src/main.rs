//! Tonecheck - classify the sentiment of short comments from the terminal.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tonecheck_cli::presentation::RenderOptions;
use tonecheck_cli::{load_config, write_outcomes, OutputOptions};
use tonecheck_core::SentimentClassifier;
use tracing_subscriber::EnvFilter;

/// Tonecheck - heuristic sentiment for short comments
#[derive(Parser, Debug)]
#[command(name = "tonecheck", version, about)]
struct Args {
    /// Comment to classify (words are joined with spaces); read from stdin if omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Classify each stdin line as a separate comment
    #[arg(long, conflicts_with = "text")]
    lines: bool,

    /// Print one JSON object per comment
    #[arg(long)]
    json: bool,

    /// Show emoji counts, word score and decision branch
    #[arg(long)]
    explain: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// JSON file overriding classifier settings
    #[arg(long, env = "TONECHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Initialize logging to stderr so stdout carries only results.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tonecheck={},warn", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Collect comments from arguments or stdin.
fn read_inputs(args: &Args) -> io::Result<Vec<String>> {
    if !args.text.is_empty() {
        return Ok(vec![args.text.join(" ")]);
    }

    let stdin = io::read_to_string(io::stdin())?;
    if args.lines {
        Ok(stdin.lines().map(String::from).collect())
    } else {
        Ok(vec![stdin])
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let classifier = SentimentClassifier::new(config);
    let inputs = read_inputs(args)?;
    tracing::debug!("Classifying {} comment(s)", inputs.len());

    let options = OutputOptions {
        json: args.json,
        render: RenderOptions {
            color: !args.no_color && !args.json && io::stdout().is_terminal(),
            explain: args.explain,
        },
    };

    let mut stdout = io::stdout().lock();
    let rejected = write_outcomes(&classifier, &inputs, options, &mut stdout)?;

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
