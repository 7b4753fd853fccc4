// src/core/commands/string/strlen.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Length of the value stored at a key.
#[derive(Debug, Clone, Default)]
pub struct StrLen {
    pub key: Bytes,
}

impl StrLen {
    pub fn new(key: impl Into<Bytes>) -> Self {
        StrLen { key: key.into() }
    }
}

impl CommandSpec for StrLen {
    fn name(&self) -> &'static str {
        "strlen"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone()])
    }
}
