// src/core/commands/generic/randomkey.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Picks a random key from the keyspace; replies null when it is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKey;

impl RandomKey {
    pub fn new() -> Self {
        RandomKey
    }
}

impl CommandSpec for RandomKey {
    fn name(&self) -> &'static str {
        "randomkey"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![])
    }
}
