use std::path::Path;

use clap::Parser;
use listwalk::cli::commands;
use listwalk::cli::{Cli, Commands};
use listwalk::error::ConfigError;
use listwalk::io::ExitCode;
use listwalk::{FailurePolicy, Settings, logging};

fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) if !path.exists() => Err(ConfigError::NotFound(path.display().to_string())),
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Init writes the settings file, so it must not depend on loading one
    if let Commands::Init { force } = cli.command {
        logging::init();
        let root = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot read current directory: {e}");
                return ExitCode::ConfigError.into();
            }
        };
        return commands::init::run_init(&root, force).into();
    }

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init();
            eprintln!("Error: {e}");
            return ExitCode::ConfigError.into();
        }
    };
    logging::init_with_config(&settings.logging);
    tracing::debug!(?settings, "settings loaded");

    let result = match cli.command {
        Commands::Run {
            lessons,
            keep_going,
            json,
        } => {
            let policy = if keep_going {
                FailurePolicy::KeepGoing
            } else {
                settings.run.failure_policy()
            };
            commands::run::run(&lessons, policy, json || settings.run.json)
        }
        Commands::Lessons => Ok(commands::lessons::run()),
        Commands::Config => Ok(commands::init::run_config(&settings)),
        Commands::Init { .. } => unreachable!("handled before settings are loaded"),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::StepFailed.into()
        }
    }
}
