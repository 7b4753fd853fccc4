// src/core/commands/generic/keys.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Lists keys matching a glob-style pattern.
///
/// The pattern is forwarded verbatim; glob semantics are the server's.
#[derive(Debug, Clone, Default)]
pub struct Keys {
    pub pattern: Bytes,
}

impl Keys {
    pub fn new(pattern: impl Into<Bytes>) -> Self {
        Keys {
            pattern: pattern.into(),
        }
    }
}

impl CommandSpec for Keys {
    fn name(&self) -> &'static str {
        "keys"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.pattern.clone()])
    }
}
