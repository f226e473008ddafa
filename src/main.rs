//! Text Interpolator CLI
//!
//! Usage:
//!   text-interpolator [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>       Config file with delimiters and variables (TOML format)
//!   -l, --left <DELIM>        Left delimiter (overrides config)
//!   -r, --right <DELIM>       Right delimiter (overrides config)
//!   -v, --var <NAME=VALUE>    Register a variable (repeatable)
//!   -d, --debug               Log debug output to stderr
//!   -h, --help                Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use text_interpolator::{parse_assignment, Interpolator, InterpolatorConfig};

#[derive(Parser)]
#[command(name = "text-interpolator")]
#[command(about = "Substitute delimited placeholders in text")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Config file with delimiters and variables (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Left delimiter
    #[arg(short, long, allow_hyphen_values = true)]
    left: Option<String>,

    /// Right delimiter
    #[arg(short, long, allow_hyphen_values = true)]
    right: Option<String>,

    /// Variable as NAME=VALUE, applied after the config file's variables
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    vars: Vec<(String, String)>,

    /// Log debug output to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    // Load config
    let mut config = match &cli.config {
        Some(path) => match InterpolatorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => InterpolatorConfig::default(),
    };
    if let Some(left) = cli.left {
        config = config.with_left_delim(left);
    }
    if let Some(right) = cli.right {
        config = config.with_right_delim(right);
    }

    // Read input
    let template = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut interpolator = Interpolator::from_config(&config);
    interpolator.register_variables(cli.vars);
    tracing::debug!(
        left = interpolator.left_delim(),
        right = interpolator.right_delim(),
        variables = interpolator.len(),
        "evaluating template"
    );

    let output = interpolator.evaluate(&template);
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

/// Route `tracing` events to stderr, honouring `RUST_LOG` unless `--debug` is set
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
