//! Lessons command - list what `run` can execute.

use console::style;
use is_terminal::IsTerminal;

use crate::io::ExitCode;
use crate::lesson;

/// Colors only when stdout is a terminal and `NO_COLOR` is unset.
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// One `name  summary` line per lesson, names padded to a common width.
pub fn format_listing(color: bool) -> Vec<String> {
    let lessons = lesson::lessons();
    let width = lessons.iter().map(|l| l.name().len()).max().unwrap_or(0);

    lessons
        .iter()
        .map(|l| {
            let name = format!("{:<width$}", l.name());
            if color {
                format!("  {}  {}", style(name).green().bold(), l.summary())
            } else {
                format!("  {name}  {}", l.summary())
            }
        })
        .collect()
}

pub fn run() -> ExitCode {
    let color = use_color();
    if color {
        println!("{}", style("Lessons:").cyan().bold());
    } else {
        println!("Lessons:");
    }
    for line in format_listing(color) {
        println!("{line}");
    }
    ExitCode::Success
}
