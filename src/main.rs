/*============================================================
  Synavera Project: Senlin-Client
  Module: senlin_client::main
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Entry point for Senlin-Client. Reads an error payload
    returned by the Senlin service, classifies it, and renders
    the resulting error with a deterministic exit code.

  Security / Safety Notes:
    Operates within user privileges. Reads the payload from an
    argument, a file, or stdin; performs no network I/O.

  Dependencies:
    clap for CLI parsing, chrono for session stamps.

  Operational Scope:
    Invoked by operators and scripts to triage error bodies
    captured from the clustering API.

  Revision History:
    2026-10-17 COD  Authored Senlin-Client runtime.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Structured logging following Synavera cadence
    - Configurable execution via CLI and config file
============================================================*/

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{ArgAction, Parser};

use senlin_client::config::SenlinConfig;
use senlin_client::logger::Logger;
use senlin_client::{parse_exception, RawError, Result, SdkHttpException, SenlinError};

/// Command-line arguments for Senlin-Client.
#[derive(Debug, Parser)]
#[command(
    name = "senlin_client",
    version,
    author = "Synavera Systems",
    about = "Classify and render Senlin service error payloads"
)]
struct Cli {
    /// JSON error payload.
    payload: Option<String>,
    /// Read the payload from a file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Read the payload from stdin.
    #[arg(long, action = ArgAction::SetTrue)]
    stdin: bool,
    /// Treat the payload as the details of an SDK HTTP exception.
    #[arg(long, action = ArgAction::SetTrue)]
    sdk: bool,
    /// Override configuration file path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Explicit log file path.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
    /// Render tracebacks and echo debug logging to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match SenlinConfig::load_from_optional_path(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return err.exit_code();
        }
    };
    let mode = config.render_mode(cli.verbose);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.render(mode));
            err.exit_code()
        }
    }
}

fn run(cli: &Cli, config: &SenlinConfig) -> Result<()> {
    let log_path = cli.log.clone().or_else(|| {
        config.logging.enabled.then(|| {
            let stamp = Utc::now().format("%Y-%m-%d_%H-%M-%S");
            config.log_dir().join(format!("classify_{stamp}.log"))
        })
    });
    let verbose = cli.verbose || config.output.verbose;
    let logger = Logger::new(log_path, verbose)?;
    logger.info("INIT", "Senlin-Client classifier starting.");

    let text = read_payload(cli)?;
    let raw = if text.trim().is_empty() {
        RawError::opaque(&text)
    } else if cli.sdk {
        RawError::from(SdkHttpException::new(None, text))
    } else {
        RawError::Text(text)
    };

    let outcome = parse_exception(raw, &logger);
    match &outcome {
        Ok(()) => logger.info("RESULT", "No typed error raised."),
        Err(err) => logger.info(
            "RESULT",
            format!("Raised error with exit status {}", err.exit_status()),
        ),
    }
    logger.finalize()?;
    outcome
}

fn read_payload(cli: &Cli) -> Result<String> {
    let sources = [cli.payload.is_some(), cli.file.is_some(), cli.stdin]
        .iter()
        .filter(|given| **given)
        .count();
    if sources != 1 {
        return Err(SenlinError::command(
            "Provide exactly one of PAYLOAD, --file or --stdin",
        ));
    }

    if let Some(payload) = &cli.payload {
        return Ok(payload.clone());
    }

    if let Some(path) = &cli.file {
        let bytes = std::fs::read(path).map_err(|err| {
            SenlinError::Filesystem(format!("Failed to read {}: {err}", path.display()))
        })?;
        return String::from_utf8(bytes).map_err(|_| {
            SenlinError::file_format(format!("{} is not valid UTF-8 text", path.display()))
        });
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
