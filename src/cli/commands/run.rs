//! Run command - execute lessons and print their traces.

use std::io::Write;

use anyhow::{Context, Result};

use crate::error::{LessonError, LessonResult};
use crate::io::{Envelope, ErrorDetails, ExitCode, ResultCode};
use crate::lesson::{self, FailurePolicy, Lesson, Trace};

/// Resolve lesson names in the order given; no names means every lesson.
pub fn resolve(names: &[String]) -> LessonResult<Vec<&'static dyn Lesson>> {
    if names.is_empty() {
        return Ok(lesson::lessons().to_vec());
    }
    names.iter().map(|name| lesson::find(name)).collect()
}

fn available_names() -> String {
    lesson::lessons()
        .iter()
        .map(|l| l.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run lessons until one aborts. Returns the traces gathered so far.
fn run_all(lessons: &[&'static dyn Lesson], policy: FailurePolicy) -> Vec<Trace> {
    let mut traces = Vec::with_capacity(lessons.len());
    for lesson in lessons {
        let trace = lesson::run(*lesson, policy);
        let aborted = trace.aborted;
        traces.push(trace);
        if aborted {
            break;
        }
    }
    traces
}

/// Run the run command.
pub fn run(names: &[String], policy: FailurePolicy, json: bool) -> Result<ExitCode> {
    let lessons = match resolve(names) {
        Ok(lessons) => lessons,
        Err(e) => return report_unknown(&e, json),
    };

    let traces = run_all(&lessons, policy);
    if json {
        write_json(&traces)
    } else {
        write_text(&traces)
    }
}

fn report_unknown(error: &LessonError, json: bool) -> Result<ExitCode> {
    if json {
        let envelope: Envelope<Vec<Trace>> = Envelope::error(ResultCode::UnknownLesson, error.to_string())
            .with_error_details(ErrorDetails {
                step: None,
                suggestions: vec![format!("Available lessons: {}", available_names())],
            });
        println!("{}", envelope.to_json().context("failed to serialize envelope")?);
    } else {
        eprintln!("Error: {error}");
        eprintln!("Available lessons: {}", available_names());
    }
    Ok(ExitCode::from_lesson_error(error))
}

fn write_text(traces: &[Trace]) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for trace in traces {
        for entry in &trace.output {
            writeln!(out, "{entry}").context("failed to write lesson output")?;
        }
    }
    out.flush().context("failed to flush lesson output")?;

    match traces.iter().find(|t| t.aborted) {
        Some(trace) => {
            let message = trace
                .failures
                .last()
                .map(|f| f.message.as_str())
                .unwrap_or("step failed");
            eprintln!("Error: lesson `{}` stopped: {message}", trace.lesson);
            eprintln!("Use --keep-going to continue past failing steps.");
            Ok(ExitCode::StepFailed)
        }
        None => Ok(ExitCode::Success),
    }
}

fn write_json(traces: &[Trace]) -> Result<ExitCode> {
    let failures: usize = traces.iter().map(|t| t.failures.len()).sum();
    let count = traces.len();

    let envelope = match traces.iter().find(|t| t.aborted) {
        Some(trace) => {
            let failure = trace.failures.last();
            Envelope::error(
                ResultCode::StepFailed,
                failure.map_or_else(|| "step failed".to_string(), |f| f.message.clone()),
            )
            .with_data(traces.to_vec())
            .with_error_details(ErrorDetails {
                step: failure.map(|f| f.step.clone()),
                suggestions: vec!["Run with --keep-going to continue past failing steps".to_string()],
            })
        }
        None if failures > 0 => {
            Envelope::partial(traces.to_vec(), format!("{failures} step(s) failed"))
        }
        None => Envelope::success(traces.to_vec()),
    }
    .with_count(count);

    println!("{}", envelope.to_json().context("failed to serialize envelope")?);
    Ok(envelope.code.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_all_lessons() {
        let all = resolve(&[]).unwrap();
        assert_eq!(all.len(), lesson::lessons().len());
    }

    #[test]
    fn test_resolve_keeps_requested_order() {
        let names = vec!["strings".to_string(), "lists".to_string()];
        let resolved: Vec<_> = resolve(&names).unwrap().iter().map(|l| l.name()).collect();
        assert_eq!(resolved, ["strings", "lists"]);
    }

    #[test]
    fn test_resolve_rejects_unknown_names() {
        let names = vec!["strings".to_string(), "dicts".to_string()];
        assert!(matches!(resolve(&names), Err(LessonError::UnknownLesson(n)) if n == "dicts"));
    }

    #[test]
    fn test_strict_run_stops_after_aborted_lesson() {
        let lessons = resolve(&["lists".to_string(), "strings".to_string()]).unwrap();
        let traces = run_all(&lessons, FailurePolicy::Strict);
        assert_eq!(traces.len(), 1);
        assert!(traces[0].aborted);
    }

    #[test]
    fn test_keep_going_runs_every_lesson() {
        let lessons = resolve(&[]).unwrap();
        let traces = run_all(&lessons, FailurePolicy::KeepGoing);
        assert_eq!(traces.len(), 2);
        assert!(traces.iter().all(|t| !t.aborted));
    }
}
