// src/core/commands/generic/exists.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Tests whether a key exists.
#[derive(Debug, Clone, Default)]
pub struct Exists {
    pub key: Bytes,
}

impl Exists {
    pub fn new(key: impl Into<Bytes>) -> Self {
        Exists { key: key.into() }
    }
}

impl CommandSpec for Exists {
    fn name(&self) -> &'static str {
        "exists"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone()])
    }
}
