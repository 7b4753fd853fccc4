// src/core/commands/string/get.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Fetches the value stored at a key.
#[derive(Debug, Clone, Default)]
pub struct Get {
    pub key: Bytes,
}

impl Get {
    pub fn new(key: impl Into<Bytes>) -> Self {
        Get { key: key.into() }
    }
}

impl CommandSpec for Get {
    fn name(&self) -> &'static str {
        "get"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone()])
    }
}
