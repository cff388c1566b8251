//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Step-by-step walkthroughs of list and string operations
#[derive(Parser, Debug)]
#[command(
    name = "listwalk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Step-by-step walkthroughs of list and string operations",
    long_about = "Run short lessons that print the state of lists and strings after every operation.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run lessons and print their output
    #[command(
        about = "Run lessons and print every step",
        after_help = "Examples:\n  listwalk run\n  listwalk run strings\n  listwalk run lists --keep-going\n  listwalk run --json"
    )]
    Run {
        /// Lessons to run, in order (all lessons when omitted)
        #[arg(value_name = "LESSON")]
        lessons: Vec<String>,

        /// Continue past failing steps (overrides run.keep_going)
        #[arg(short, long)]
        keep_going: bool,

        /// Emit a JSON envelope instead of plain lines (overrides run.json)
        #[arg(long)]
        json: bool,
    },

    /// List available lessons
    #[command(about = "List available lessons")]
    Lessons,

    /// Initialize project
    #[command(about = "Set up .listwalk directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}
