// src/driver/mod.rs

//! The boundary contract with the underlying wire driver.
//!
//! This crate never speaks the wire protocol itself. A [`Driver`] owns the
//! connection: it frames a command name plus its argument tokens, sends
//! them, and hands back a decoded [`Reply`]. Connection management,
//! reconnection, and pipelining all live on the driver's side of this
//! trait.

use crate::core::errors::CitrineError;
use async_trait::async_trait;
use bytes::Bytes;

/// A single decoded reply from the store.
///
/// Error replies never appear here: a driver must surface them as
/// [`CitrineError::Server`] so the error path stays uniform.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Simple(String),
    Bulk(Bytes),
    Integer(i64),
    Array(Vec<Reply>),
    Null,
}

impl Reply {
    /// The integer replies (counts, lengths, removed totals).
    pub fn into_integer(self) -> Result<i64, CitrineError> {
        match self {
            Reply::Integer(value) => Ok(value),
            other => Err(unexpected("integer", &other)),
        }
    }

    /// An integer reply that may be null (e.g. a rank lookup on a missing
    /// member).
    pub fn into_opt_integer(self) -> Result<Option<i64>, CitrineError> {
        match self {
            Reply::Null => Ok(None),
            other => other.into_integer().map(Some),
        }
    }

    /// A `0`/`1` integer reply read as a boolean.
    pub fn into_flag(self) -> Result<bool, CitrineError> {
        match self {
            Reply::Integer(0) => Ok(false),
            Reply::Integer(1) => Ok(true),
            other => Err(unexpected("0/1 flag", &other)),
        }
    }

    /// An `OK`-or-null reply read as "did the write happen" (conditional
    /// `SET` forms reply null when the condition left the key untouched).
    pub fn into_ok(self) -> Result<bool, CitrineError> {
        match self {
            Reply::Simple(ref status) if status == "OK" => Ok(true),
            Reply::Null => Ok(false),
            other => Err(unexpected("OK status", &other)),
        }
    }

    /// A simple-string reply.
    pub fn into_simple(self) -> Result<String, CitrineError> {
        match self {
            Reply::Simple(value) => Ok(value),
            other => Err(unexpected("simple string", &other)),
        }
    }

    /// A bulk reply that may be null.
    pub fn into_bulk(self) -> Result<Option<Bytes>, CitrineError> {
        match self {
            Reply::Bulk(value) => Ok(Some(value)),
            Reply::Null => Ok(None),
            other => Err(unexpected("bulk string", &other)),
        }
    }

    /// An array reply. A null reply counts as an empty array, matching the
    /// server's two spellings of "no matches".
    pub fn into_array(self) -> Result<Vec<Reply>, CitrineError> {
        match self {
            Reply::Array(items) => Ok(items),
            Reply::Null => Ok(vec![]),
            other => Err(unexpected("array", &other)),
        }
    }

    /// A score carried as bulk text (or, for integral scores, an integer).
    pub fn into_double(self) -> Result<f64, CitrineError> {
        match self {
            Reply::Integer(value) => Ok(value as f64),
            Reply::Bulk(value) => Ok(std::str::from_utf8(&value)?.parse::<f64>()?),
            other => Err(unexpected("score", &other)),
        }
    }

    /// A score reply that may be null (missing member or key).
    pub fn into_opt_double(self) -> Result<Option<f64>, CitrineError> {
        match self {
            Reply::Null => Ok(None),
            other => other.into_double().map(Some),
        }
    }
}

fn unexpected(wanted: &str, got: &Reply) -> CitrineError {
    CitrineError::UnexpectedReply(format!("expected {wanted}, got {got:?}"))
}

/// The transport collaborator.
///
/// Implementations are expected to be cheap to share behind an `Arc` and
/// safe to call from any task.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Sends one command and resolves with its decoded reply.
    async fn dispatch(
        &self,
        name: &'static str,
        args: Vec<Bytes>,
    ) -> Result<Reply, CitrineError>;
}
