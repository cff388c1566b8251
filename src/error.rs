use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("{operation} index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        operation: &'static str,
        index: isize,
        len: usize,
    },

    #[error("pop from empty list")]
    PopEmpty,

    #[error("{value:?} is not in list")]
    ValueNotFound { value: String },
}

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("step `{step}` failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: SequenceError,
    },

    #[error("unknown lesson: {0}")]
    UnknownLesson(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("configuration file not found: {0}")]
    NotFound(String),

    #[error("configuration file already exists at {0}. Use --force to overwrite")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}

pub type SequenceResult<T> = Result<T, SequenceError>;
pub type LessonResult<T> = Result<T, LessonError>;
