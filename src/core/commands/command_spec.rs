// src/core/commands/command_spec.rs

//! Defines the `CommandSpec` trait, which describes a command's wire form.

use crate::core::errors::CitrineError;
use bytes::Bytes;

/// A trait describing a command's wire form: its name and the literal
/// argument tokens that follow it.
pub trait CommandSpec {
    /// The name of the command in lowercase.
    fn name(&self) -> &'static str;

    /// Encodes the command's arguments into the tokens sent to the server.
    ///
    /// Encoding is where client-side invariants are enforced: a NaN range
    /// bound, a weight list that disagrees with its key count, or
    /// conflicting flags fail here rather than travelling to the server.
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError>;
}
