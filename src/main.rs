use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use deep_match::{MatchError, MatchOptions, Matcher};
use serde_json::Value;
use tracing::Level;

/// Check that one JSON document structurally matches another.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Actual JSON document, or `@file` to read it from a file.
    actual: String,
    /// Expected JSON document, or `@file` to read it from a file.
    expected: String,
    /// Disable type coercion
    #[arg(long)]
    strict: bool,
    /// Compare strings ignoring case
    #[arg(long)]
    case_insensitive: bool,
    /// Allowed absolute difference between numbers
    #[arg(long)]
    threshold: Option<f64>,
    /// Deepest object level to descend into
    #[arg(long)]
    max_depth: Option<usize>,
    /// Label prefixed to the failure message
    #[arg(long)]
    message: Option<String>,
    /// JSON file with match options; flags override its values
    #[arg(long)]
    options: Option<PathBuf>,
    /// Log comparison details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = exit_code(&e);
            if code == 1 {
                eprintln!("{e}");
            } else {
                eprintln!("error: {e}");
            }
            ExitCode::from(code)
        }
    }
}

// 1 when the documents disagree, 2 when the inputs themselves are unusable
fn exit_code(err: &MatchError) -> u8 {
    match err {
        MatchError::Mismatch(_) | MatchError::DepthLimitExceeded { .. } => 1,
        _ => 2,
    }
}

fn run(args: &Args) -> deep_match::Result<()> {
    let actual = read_document(&args.actual)?;
    let expected = read_document(&args.expected)?;
    let matcher = Matcher::new(build_options(args)?)?;
    matcher.compare(&actual, &expected)
}

fn build_options(args: &Args) -> deep_match::Result<MatchOptions> {
    let mut opts = match args.options.as_ref() {
        Some(path) => MatchOptions::from_json(&std::fs::read_to_string(path)?)?,
        None => MatchOptions::default(),
    };
    if args.strict {
        opts.strict = true;
    }
    if args.case_insensitive {
        opts.case_sensitive = false;
    }
    if let Some(t) = args.threshold {
        opts.error_threshold = t;
    }
    if let Some(d) = args.max_depth {
        opts.max_depth = d;
    }
    if let Some(m) = args.message.as_ref() {
        opts.message = Some(m.clone());
    }
    Ok(opts)
}

// `@path` reads the document from disk; anything else is inline JSON.
fn read_document(arg: &str) -> Result<Value, MatchError> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => arg.to_string(),
    };
    Ok(serde_json::from_str(&text)?)
}
