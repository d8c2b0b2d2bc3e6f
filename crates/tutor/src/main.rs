// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tutor - request orchestration for a tutoring backend.
//!
//! This is the binary entry point. It loads configuration, installs logging,
//! and runs one command against the analysis and routing pipeline.

mod ask;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tutor_config::TutorConfig;
use tutor_core::TutorError;

/// Tutor - request orchestration for a tutoring backend.
#[derive(Parser, Debug)]
#[command(name = "tutor", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a message through the pipeline and call the chosen tool.
    Ask {
        /// The learner's message.
        message: String,
        /// Learner's current mastery of the subject, in [0, 1].
        #[arg(long, value_parser = parse_level)]
        initial_mastery: Option<f64>,
    },
    /// Show how a message is classified, without calling a tool.
    Classify {
        /// The learner's message.
        message: String,
    },
    /// List the built-in tools and their parameter schemas.
    Tools,
    /// Print the effective configuration.
    Config,
}

fn parse_level(raw: &str) -> Result<f64, String> {
    let level: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&level) {
        Ok(level)
    } else {
        Err(format!("{level} is not in [0, 1]"))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => tutor_config::load_and_validate_path(path),
        None => tutor_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            tutor_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.service.log_level);
    tracing::debug!(
        service = %config.service.name,
        backend = ?config.tools.backend,
        "config loaded"
    );

    if let Err(err) = run(cli.command, &config).await {
        eprintln!("{}", ask::render_failure(&err));
        std::process::exit(ask::exit_code(&err));
    }
}

async fn run(command: Commands, config: &TutorConfig) -> Result<(), TutorError> {
    let output = match command {
        Commands::Ask {
            message,
            initial_mastery,
        } => {
            let report = ask::run_ask(config, &message, initial_mastery).await?;
            serde_json::to_string_pretty(&report)
                .map_err(|e| TutorError::Internal(format!("failed to encode outcome: {e}")))?
        }
        Commands::Classify { message } => inspect::classify_json(&message)?,
        Commands::Tools => inspect::tools_json()?,
        Commands::Config => inspect::config_toml(config)?,
    };
    println!("{output}");
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tutor={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_accepts_initial_mastery() {
        let cli = Cli::parse_from(["tutor", "ask", "explain limits", "--initial-mastery", "0.3"]);
        match cli.command {
            Commands::Ask {
                message,
                initial_mastery,
            } => {
                assert_eq!(message, "explain limits");
                assert_eq!(initial_mastery, Some(0.3));
            }
            other => panic!("expected ask, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_mastery_is_rejected() {
        assert!(Cli::try_parse_from(["tutor", "ask", "hi", "--initial-mastery", "1.5"]).is_err());
        assert!(parse_level("abc").is_err());
        assert_eq!(parse_level("1").unwrap(), 1.0);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["tutor", "tools", "--config", "/tmp/tutor.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tutor.toml")));
        assert!(matches!(cli.command, Commands::Tools));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = tutor_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.service.name, "tutor");
    }
}
