pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod lesson;
pub mod logging;
pub mod sequence;
pub mod text;

pub use config::Settings;
pub use error::{ConfigError, LessonError, SequenceError};
pub use lesson::{FailurePolicy, Lesson, Trace};
pub use sequence::TokenList;
