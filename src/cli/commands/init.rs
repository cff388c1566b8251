//! Init and Config commands.

use std::path::Path;

use crate::config::Settings;
use crate::error::ConfigError;
use crate::io::ExitCode;

/// Run init command - create configuration file under `root`.
pub fn run_init(root: &Path, force: bool) -> ExitCode {
    match Settings::init_config_file(root, force) {
        Ok(path) => {
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e @ ConfigError::AlreadyExists(_)) => {
            eprintln!("Error: {e}");
            ExitCode::ConfigError
        }
        Err(e) => {
            eprintln!("Error: could not write configuration: {e}");
            ExitCode::ConfigError
        }
    }
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings) -> ExitCode {
    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::ConfigError
        }
    }
}
