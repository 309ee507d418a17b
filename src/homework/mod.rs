//! Homework review payloads: the verdict catalog, response shape checks and
//! the user-facing status messages built from them.

pub(crate) mod error;
mod response;
mod status;
mod verdicts;

pub use error::PollError;
pub use response::{current_date, extract_homeworks};
pub use status::{failure_message, parse_status};
