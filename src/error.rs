use std::io;

use thiserror::Error;

/// Failures raised while generating questions or running a drill session.
///
/// A wrong or unreadable answer is never one of these; the runner treats it as
/// an incorrect attempt.
#[derive(Debug, Error)]
pub enum DrillError {
    /// Generation parameters or CLI tokens outside their valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Standard input ended before every question was answered.
    #[error("input closed before the session finished")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DrillError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        DrillError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
