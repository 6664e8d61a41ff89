//! ollama-generate — send one completion request to a local Ollama server
//!
//! Usage:
//!   ollama-generate                      Run the default request
//!   ollama-generate --model codellama    Override the model
//!   ollama-generate --strict             Exit 1 when the request did not succeed

use anyhow::Context;
use ollama_generate::{RequestRunner, RunnerConfig};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Bad arguments or a configuration that fails validation.
const EXIT_USAGE: i32 = 2;

#[derive(Debug, PartialEq)]
struct CliArgs {
    config: RunnerConfig,
    strict: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(CliArgs),
    Help,
    Version,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args, RunnerConfig::from_env()) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("ollama-generate {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(EXIT_USAGE);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = match RequestRunner::new(cli.config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_USAGE);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = runner
        .run_and_report(&mut out)
        .context("failed to write outcome to stdout")?;

    let code = outcome.exit_code(cli.strict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Apply command-line flags on top of `config`.
fn parse_args(args: &[String], mut config: RunnerConfig) -> Result<Command, String> {
    let mut strict = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--url" => config.endpoint = take_value(&mut iter, arg)?,
            "--model" => config.model = take_value(&mut iter, arg)?,
            "--prompt" => config.prompt = take_value(&mut iter, arg)?,
            "--timeout" => {
                let raw = take_value(&mut iter, arg)?;
                let secs = raw
                    .parse::<u64>()
                    .map_err(|_| format!("--timeout expects whole seconds, got '{raw}'"))?;
                config.timeout = Some(Duration::from_secs(secs));
            }
            "--strict" => strict = true,
            "version" | "--version" | "-V" => return Ok(Command::Version),
            "help" | "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok(Command::Run(CliArgs { config, strict }))
}

fn take_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

const USAGE: &str = r#"ollama-generate — one-shot completion against Ollama /api/generate

USAGE:
    ollama-generate [OPTIONS]

OPTIONS:
    --url <url>           Endpoint (default http://localhost:11434/api/generate)
    --model <name>        Model name (default starcoder)
    --prompt <text>       Prompt to complete (default "def compute_gcd(a,b):")
    --timeout <secs>      Request timeout; unset waits indefinitely
    --strict              Exit 1 on transport, status or parse failures
    -V, --version         Show version information
    -h, --help            Show this help message

ENVIRONMENT:
    OLLAMA_GENERATE_URL, OLLAMA_GENERATE_MODEL, OLLAMA_GENERATE_PROMPT,
    OLLAMA_GENERATE_TIMEOUT_SECS   Defaults overridden by the flags above
    RUST_LOG                       Log filter for stderr diagnostics (default warn)"#;
