// src/core/errors.rs

//! Defines the primary error type for the crate.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error enum, representing all possible failures in the binding.
///
/// Variants carry owned strings rather than wrapped source errors so values
/// stay `Clone` and comparable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitrineError {
    #[error("I/O error: {0}")]
    Io(String),

    /// An error reply produced by the server, verbatim.
    #[error("Server error: {0}")]
    Server(String),

    #[error("Command '{0}' timed out")]
    Timeout(String),

    #[error("Wrong number of arguments for '{0}' command")]
    WrongArgumentCount(String),

    #[error("Syntax error")]
    SyntaxError,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value is not an integer or out of range")]
    NotAnInteger,

    #[error("value is not a valid float")]
    NotAFloat,

    #[error("score bound is not a valid number")]
    InvalidScoreBound,

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for CitrineError {
    fn from(e: std::io::Error) -> Self {
        CitrineError::Io(e.to_string())
    }
}

impl From<ParseIntError> for CitrineError {
    fn from(_: ParseIntError) -> Self {
        CitrineError::NotAnInteger
    }
}

impl From<ParseFloatError> for CitrineError {
    fn from(_: ParseFloatError) -> Self {
        CitrineError::NotAFloat
    }
}

impl From<std::str::Utf8Error> for CitrineError {
    fn from(_: std::str::Utf8Error) -> Self {
        CitrineError::UnexpectedReply("reply is not valid UTF-8".to_string())
    }
}
