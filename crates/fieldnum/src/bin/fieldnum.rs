use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fieldnum::{Field, Messages, NumberParser, validator};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "fieldnum", about = "Parse and validate form answers")]
struct Cli {
    /// Log rejection reasons and locale fallbacks to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse each value as a number and print the result.
    Parse(ParseArgs),
    /// Validate one response against a field descriptor.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Locale tag selecting the separator convention (default en-US).
    #[arg(long, short)]
    locale: Option<String>,

    /// Values to parse.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Field descriptor file (YAML, or JSON with a `.json` extension).
    #[arg(long)]
    field: PathBuf,

    /// Message override file (YAML, or JSON with a `.json` extension).
    #[arg(long)]
    messages: Option<PathBuf>,

    /// Treat RESPONSE as a JSON document instead of plain text.
    #[arg(long)]
    json: bool,

    response: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let ok = match cli.command {
        Command::Parse(args) => run_parse(&args),
        Command::Validate(args) => run_validate(&args)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")
}

fn run_parse(args: &ParseArgs) -> bool {
    let parser = match &args.locale {
        Some(locale) => NumberParser::for_locale(locale),
        None => NumberParser::default(),
    };

    let mut all_valid = true;
    for value in &args.values {
        match parser.parse(value) {
            Some(n) => println!("{value}\t{n}"),
            None => {
                all_valid = false;
                println!("{value}\tinvalid");
            }
        }
    }
    all_valid
}

fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let field_text = read(&args.field)?;
    let parsed = if is_json(&args.field) {
        Field::from_json_str(&field_text)
    } else {
        Field::from_yaml_str(&field_text)
    };
    let field =
        parsed.with_context(|| format!("invalid field descriptor {}", args.field.display()))?;

    let messages = match &args.messages {
        Some(path) => {
            let text = read(path)?;
            let parsed = if is_json(path) {
                Messages::from_json_str(&text)
            } else {
                Messages::from_yaml_str(&text)
            };
            parsed.with_context(|| format!("invalid message table {}", path.display()))?
        }
        None => Messages::default(),
    };

    let response = if args.json {
        serde_json::from_str(&args.response).context("RESPONSE is not valid JSON")?
    } else {
        Value::String(args.response.clone())
    };

    let check = validator(&field, &messages)
        .with_context(|| format!("cannot validate field '{}'", field.reference))?;
    let validation = check.validate(&response);
    println!("{}", serde_json::to_string(&validation)?);
    Ok(validation.valid)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
