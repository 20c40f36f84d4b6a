//! Sparse Matrix Operations CLI
//!
//! Adds, subtracts or multiplies two coordinate-list matrix files and writes
//! the result. Anything not given on the command line is asked for
//! interactively.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use spmat::{
    run_as, DataType, EngineConfig, Error, ErrorCategory, MultiplyStrategy, Operation,
    OperationRequest, OperationSummary,
};
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(version, about = "Add, subtract or multiply sparse coordinate-list matrices")]
struct Cli {
    /// Operation: 1/add, 2/sub, 3/mul
    #[arg(long)]
    op: Option<Operation>,

    /// First matrix file
    left: Option<PathBuf>,

    /// Second matrix file
    right: Option<PathBuf>,

    /// Where to write the result
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Element type used for parsing and arithmetic
    #[arg(long, default_value_t = DataType::F64)]
    dtype: DataType,

    /// Multiplication algorithm
    #[arg(long, default_value_t = MultiplyStrategy::RowIndexed)]
    strategy: MultiplyStrategy,

    /// Require `rows=`/`cols=` headers that match the entries
    #[arg(long)]
    strict_headers: bool,

    /// Memory-map input files
    #[arg(long)]
    mmap: bool,

    /// Print the result summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log output. `-v` for info, `-vv` for debug, `-vvv` for trace.
    /// RUST_LOG takes precedence when set
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        }
    }

    fn config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_strict_headers(self.strict_headers)
            .with_strategy(self.strategy)
            .with_mmap(self.mmap)
    }
}

fn setup_tracing(level: Level) {
    let env_filter = std::env::var_os(EnvFilter::DEFAULT_ENV).map(|_| EnvFilter::from_default_env());
    let level_filter = env_filter
        .is_none()
        .then(|| LevelFilter::from_level(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .with(level_filter)
        .init();
}

fn prompt_operation() -> Result<Operation> {
    let labels: Vec<String> = Operation::ALL
        .iter()
        .map(|op| format!("{}. {}", op.selector(), op.label()))
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose operation")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Operation::ALL[index])
}

fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("a path is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(raw.trim()))
}

fn resolve(path: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => prompt_path(prompt)?,
    };
    std::path::absolute(&path).with_context(|| format!("cannot resolve {}", path.display()))
}

fn print_summary(summary: &OperationSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!(
            "Operation successful! Result saved to {}",
            summary.output.display()
        );
        println!("Result dimensions: {}", summary.shape);
        println!("Non-zero entries: {}", summary.nnz);
    }
    Ok(())
}

fn hint(err: &anyhow::Error) -> &'static [&'static str] {
    const ALL: &[&str] = &[
        "Invalid file format (check parentheses and commas)",
        "Dimension mismatch for operation",
        "File not found or permission issues",
        "Values too large for the element type (try a wider --dtype)",
    ];

    match err.downcast_ref::<Error>() {
        Some(Error::Read { .. } | Error::Write { .. }) => &ALL[2..3],
        Some(Error::Encoding { .. }) => &ALL[..1],
        Some(err) => match err.category() {
            Some(ErrorCategory::Format) => &ALL[..1],
            Some(ErrorCategory::Dimension) => &ALL[1..2],
            Some(ErrorCategory::Overflow) => &ALL[3..],
            _ => &[],
        },
        None => &ALL[..3],
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let operation = match cli.op {
        Some(op) => op,
        None => prompt_operation()?,
    };
    let left = resolve(cli.left, "First matrix path")?;
    let right = resolve(cli.right, "Second matrix path")?;
    let output = resolve(cli.output, "Output file path")?;

    let request = OperationRequest::new(operation, left, right, output);
    let summary = run_as(cli.dtype, &request, &config)?;
    print_summary(&summary, cli.json)
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.log_level());

    if let Err(err) = run(cli) {
        eprintln!("\nError: {err}");
        let hints = hint(&err);
        if !hints.is_empty() {
            eprintln!("Common issues:");
            for line in hints {
                eprintln!("- {line}");
            }
        }
        std::process::exit(1);
    }
}
