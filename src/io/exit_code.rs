//! Process exit codes.

use crate::error::LessonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// A lesson step failed and the walk stopped
    StepFailed = 1,
    /// A lesson name on the command line matched nothing
    UnknownLesson = 2,
    ConfigError = 3,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_lesson_error(error: &LessonError) -> Self {
        match error {
            LessonError::StepFailed { .. } => Self::StepFailed,
            LessonError::UnknownLesson(_) => Self::UnknownLesson,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_errors_map_to_distinct_codes() {
        let unknown = LessonError::UnknownLesson("nope".to_string());
        assert_eq!(ExitCode::from_lesson_error(&unknown).code(), 2);

        let failed = LessonError::StepFailed {
            step: "remove honda".to_string(),
            source: crate::error::SequenceError::PopEmpty,
        };
        assert_eq!(ExitCode::from_lesson_error(&failed), ExitCode::StepFailed);
        assert_eq!(ExitCode::Success.code(), 0);
    }
}
