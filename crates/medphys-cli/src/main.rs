use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use medphys_catalog::all_modalities;
use medphys_writeup::error::WriteupError;

mod config;

use config::{Config, LogFormat};

#[derive(Parser)]
#[command(name = "medphys")]
#[command(about = "Medical physics consultation write-up generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported treatment modalities
    Modalities,
    /// Print the reference data for one modality as JSON
    Reference {
        /// Modality id (e.g. tbi, srs)
        id: String,
    },
    /// Generate a write-up from a JSON request
    Generate {
        /// Request file; read from stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ModalitySummary<'a> {
    id: &'a str,
    name: &'a str,
    payload_key: &'a str,
}

fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(config.log_format);

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::error!(error = %report, "command failed");
            eprintln!("error: {report:#}");
            exit_code(&report)
        }
    }
}

/// 2 when the request itself was rejected, 1 for everything else.
fn exit_code(report: &eyre::Report) -> ExitCode {
    if report.downcast_ref::<WriteupError>().is_some() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn run(command: Commands) -> eyre::Result<()> {
    match command {
        Commands::Modalities => {
            let summaries: Vec<ModalitySummary> = all_modalities()
                .iter()
                .map(|m| ModalitySummary {
                    id: m.id(),
                    name: m.name(),
                    payload_key: m.payload_key(),
                })
                .collect();
            print_json(&summaries)
        }
        Commands::Reference { id } => {
            let data = medphys_writeup::list_reference_data(&id)?;
            print_json(data)
        }
        Commands::Generate { input } => {
            let json = read_request(input.as_ref())?;
            let writeup = medphys_writeup::generate_json(&json)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", writeup.text).wrap_err("failed to write write-up")?;
            Ok(())
        }
    }
}

fn read_request(path: Option<&PathBuf>) -> eyre::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read request from {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .wrap_err("failed to read request from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> eyre::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).wrap_err("failed to write JSON")?;
    writeln!(stdout).wrap_err("failed to write JSON")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_request_exits_with_two() {
        let err = medphys_writeup::generate_json("{").unwrap_err();
        assert_eq!(exit_code(&eyre::Report::new(err)), ExitCode::from(2));
    }

    #[test]
    fn wrapped_writeup_error_still_exits_with_two() {
        let err = medphys_writeup::list_reference_data("proton").unwrap_err();
        let report = eyre::Report::new(err).wrap_err("reference lookup failed");
        assert_eq!(exit_code(&report), ExitCode::from(2));
    }

    #[test]
    fn other_failures_exit_with_one() {
        let report = eyre::eyre!("failed to read request from stdin");
        assert_eq!(exit_code(&report), ExitCode::FAILURE);
    }
}
