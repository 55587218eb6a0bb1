//! rcjson CLI.
//!
//! Parses JSON from a file or stdin and either re-renders it or reports
//! whether it is well formed.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rcjson::{parse_with_limits, Limits, ParseError, Style, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rcjson")]
#[command(about = "Parse, check and re-format JSON", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input and print it back
    Format {
        #[command(flatten)]
        input: InputArgs,

        /// Output layout
        #[arg(long, value_enum, default_value_t = StyleArg::Standard)]
        style: StyleArg,
    },

    /// Parse the input and report success or the first error as JSON
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct InputArgs {
    /// Input file; reads stdin when omitted
    path: Option<PathBuf>,

    /// Maximum nesting depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore data after the top-level value
    #[arg(long)]
    allow_trailing: bool,
}

impl InputArgs {
    fn limits(&self) -> Limits {
        let mut limits = Limits::strict().with_trailing_data(self.allow_trailing);
        if let Some(depth) = self.max_depth {
            limits = limits.with_max_nesting_depth(depth);
        }
        limits
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Standard,
    Classic,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Standard => Style::Standard,
            StyleArg::Classic => Style::Classic,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn load(input: &InputArgs) -> Result<Result<Value, ParseError>, ExitCode> {
    match read_input(input.path.as_deref()) {
        Ok(text) => Ok(parse_with_limits(&text, input.limits())),
        Err(e) => {
            eprintln!("error: failed to read input: {}", e);
            Err(ExitCode::from(2))
        }
    }
}

fn entry(key: &str, value: Value) -> (String, Value) {
    (key.to_string(), value)
}

/// `{"ok":{"kind":...}}` or `{"err":{"code":...,"name":...,"offset":...}}`
fn check_report(result: &Result<Value, ParseError>) -> Value {
    match result {
        Ok(value) => [entry(
            "ok",
            [entry("kind", Value::from(value.type_name()))]
                .into_iter()
                .collect(),
        )]
        .into_iter()
        .collect(),
        Err(err) => {
            let offset = i32::try_from(err.offset())
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(err.offset() as f64));
            [entry(
                "err",
                [
                    entry("code", Value::from(err.code() as i32)),
                    entry("name", Value::from(err.kind().name())),
                    entry("offset", offset),
                ]
                .into_iter()
                .collect(),
            )]
            .into_iter()
            .collect()
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { input, style } => {
            let result = match load(&input) {
                Ok(result) => result,
                Err(code) => return code,
            };
            match result {
                Ok(value) => {
                    println!("{}", value.format_with(style.into()));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Check { input } => {
            let result = match load(&input) {
                Ok(result) => result,
                Err(code) => return code,
            };
            println!("{}", check_report(&result));
            if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Version => {
            println!("rcjson v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}
