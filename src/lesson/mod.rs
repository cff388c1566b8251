//! Lessons: scripted walkthroughs that record what they print.
//!
//! A [`Lesson`] drives a [`Walk`], which appends every printed entry to a
//! [`Trace`] and applies the [`FailurePolicy`] whenever a step fails.
//!
//! ```
//! use listwalk::lesson::{self, FailurePolicy};
//!
//! let strings = lesson::find("strings").unwrap();
//! let trace = lesson::run(strings, FailurePolicy::Strict);
//! assert_eq!(trace.output[0], "Kyle David");
//! ```

mod lists;
mod strings;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LessonError, LessonResult, SequenceResult};

pub use lists::ListsLesson;
pub use strings::StringsLesson;

/// What a walk does when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the lesson at the first failing step.
    #[default]
    Strict,
    /// Log the failure, print nothing for that step, and continue.
    KeepGoing,
}

impl FailurePolicy {
    pub fn from_keep_going(keep_going: bool) -> Self {
        if keep_going {
            Self::KeepGoing
        } else {
            Self::Strict
        }
    }
}

/// A step that did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub step: String,
    pub message: String,
}

/// Everything a lesson printed, in order.
///
/// Each entry corresponds to one print and may span several lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub lesson: String,
    pub output: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<StepFailure>,
    /// True when a strict walk stopped before the end of the lesson.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub aborted: bool,
}

impl Trace {
    pub fn new(lesson: impl Into<String>) -> Self {
        Self {
            lesson: lesson.into(),
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.aborted
    }

    /// The printed output as lines, splitting entries on embedded newlines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output.iter().flat_map(|entry| entry.split('\n'))
    }
}

/// Execution context handed to [`Lesson::run`].
pub struct Walk<'a> {
    trace: &'a mut Trace,
    policy: FailurePolicy,
}

impl<'a> Walk<'a> {
    pub fn new(trace: &'a mut Trace, policy: FailurePolicy) -> Self {
        Self { trace, policy }
    }

    /// Print one entry.
    pub fn emit(&mut self, entry: impl fmt::Display) {
        let entry = entry.to_string();
        crate::debug_event!(self.trace.lesson, "emit", "{entry:?}");
        self.trace.output.push(entry);
    }

    /// Settle the result of a fallible step.
    ///
    /// Returns `Ok(Some(value))` on success. On failure a strict walk returns
    /// the error so the lesson can bail out with `?`; a keep-going walk
    /// records the failure and returns `Ok(None)`.
    pub fn check<T>(&mut self, step: &str, result: SequenceResult<T>) -> LessonResult<Option<T>> {
        match result {
            Ok(value) => {
                crate::debug_event!(self.trace.lesson, "step", "{step}");
                Ok(Some(value))
            }
            Err(source) => match self.policy {
                FailurePolicy::Strict => Err(LessonError::StepFailed {
                    step: step.to_string(),
                    source,
                }),
                FailurePolicy::KeepGoing => {
                    tracing::warn!(
                        lesson = %self.trace.lesson,
                        step,
                        "step failed, continuing: {source}"
                    );
                    self.trace.failures.push(StepFailure {
                        step: step.to_string(),
                        message: source.to_string(),
                    });
                    Ok(None)
                }
            },
        }
    }
}

pub trait Lesson: Send + Sync {
    /// Name used on the command line.
    fn name(&self) -> &'static str;

    fn summary(&self) -> &'static str;

    fn run(&self, walk: &mut Walk<'_>) -> LessonResult<()>;
}

static LESSONS: &[&dyn Lesson] = &[&ListsLesson, &StringsLesson];

/// Built-in lessons in declaration order.
pub fn lessons() -> &'static [&'static dyn Lesson] {
    LESSONS
}

pub fn find(name: &str) -> LessonResult<&'static dyn Lesson> {
    LESSONS
        .iter()
        .copied()
        .find(|lesson| lesson.name() == name)
        .ok_or_else(|| LessonError::UnknownLesson(name.to_string()))
}

/// Run a lesson to completion (or to its first failure under
/// [`FailurePolicy::Strict`]).
pub fn run(lesson: &dyn Lesson, policy: FailurePolicy) -> Trace {
    let mut trace = Trace::new(lesson.name());
    crate::log_event!(lesson.name(), "start", "policy={policy:?}");

    let result = {
        let mut walk = Walk::new(&mut trace, policy);
        lesson.run(&mut walk)
    };

    if let Err(e) = result {
        tracing::error!(lesson = lesson.name(), "{e}");
        let step = match &e {
            LessonError::StepFailed { step, .. } => step.clone(),
            LessonError::UnknownLesson(_) => String::new(),
        };
        trace.failures.push(StepFailure {
            step,
            message: e.to_string(),
        });
        trace.aborted = true;
    }

    crate::log_event!(
        lesson.name(),
        "finish",
        "{} entries, {} failures",
        trace.output.len(),
        trace.failures.len()
    );
    trace
}
