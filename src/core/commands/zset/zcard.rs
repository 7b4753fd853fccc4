// src/core/commands/zset/zcard.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// The number of members in a sorted set.
#[derive(Debug, Clone, Default)]
pub struct ZCard {
    pub key: Bytes,
}

impl ZCard {
    pub fn new(key: impl Into<Bytes>) -> Self {
        ZCard { key: key.into() }
    }
}

impl CommandSpec for ZCard {
    fn name(&self) -> &'static str {
        "zcard"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone()])
    }
}
