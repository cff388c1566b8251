//! JSON output envelope for `listwalk run --json`.
//!
//! The same shape is used for success and failure so consumers can always
//! read `status`, `code`, and `exit_code` before looking at `data`.

use serde::{Deserialize, Serialize};

use super::ExitCode;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Result,
    Error,
}

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Every lesson ran cleanly
    Success,
    /// Lessons ran to the end but some steps failed
    PartialSuccess,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    StepFailed,
    UnknownLesson,
    ConfigError,
}

impl ResultCode {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Ok => ExitCode::Success,
            Self::StepFailed => ExitCode::StepFailed,
            Self::UnknownLesson => ExitCode::UnknownLesson,
            Self::ConfigError => ExitCode::ConfigError,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub status: Status,

    pub code: ResultCode,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    pub message: String,

    /// Result payload; also present on step failures so the partial trace
    /// is not lost
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,

    pub meta: Meta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Step that failed, when a lesson step caused the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Crate version that produced the output
    pub version: String,

    pub schema_version: String,

    /// Number of items in data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            count: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            message_type: MessageType::Result,
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.code(),
            message: "All lessons completed".to_string(),
            data: Some(data),
            error: None,
            meta: Meta::default(),
        }
    }

    /// Lessons completed but recorded failing steps along the way.
    pub fn partial(data: T, message: impl Into<String>) -> Self {
        Self {
            status: Status::PartialSuccess,
            message: message.into(),
            ..Self::success(data)
        }
    }

    /// Create an error envelope.
    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Error,
            status: Status::Error,
            code,
            exit_code: code.exit_code().code(),
            message: message.into(),
            data: None,
            error: None,
            meta: Meta::default(),
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }

    pub fn with_error_details(mut self, details: ErrorDetails) -> Self {
        self.error = Some(details);
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}
