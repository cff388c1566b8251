//! Output handling for the CLI.
//!
//! Plain text writes one trace line per print; `--json` wraps the traces
//! in an [`Envelope`]. Exit codes are shared by both formats.

pub mod envelope;
pub mod exit_code;

pub use envelope::{Envelope, ErrorDetails, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
