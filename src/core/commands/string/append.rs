// src/core/commands/string/append.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Appends to the value at a key, replying with the new length.
#[derive(Debug, Clone, Default)]
pub struct Append {
    pub key: Bytes,
    pub value: Bytes,
}

impl Append {
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Append {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CommandSpec for Append {
    fn name(&self) -> &'static str {
        "append"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.value.clone()])
    }
}
