// src/core/commands/string/setnx.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Stores a value only if the key does not already exist.
#[derive(Debug, Clone, Default)]
pub struct SetNx {
    pub key: Bytes,
    pub value: Bytes,
}

impl SetNx {
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        SetNx {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CommandSpec for SetNx {
    fn name(&self) -> &'static str {
        "setnx"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.value.clone()])
    }
}
