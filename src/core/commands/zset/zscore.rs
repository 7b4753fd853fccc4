// src/core/commands/zset/zscore.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// A member's score; null when the member or key is missing.
#[derive(Debug, Clone, Default)]
pub struct ZScore {
    pub key: Bytes,
    pub member: Bytes,
}

impl ZScore {
    pub fn new(key: impl Into<Bytes>, member: impl Into<Bytes>) -> Self {
        ZScore {
            key: key.into(),
            member: member.into(),
        }
    }
}

impl CommandSpec for ZScore {
    fn name(&self) -> &'static str {
        "zscore"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.member.clone()])
    }
}
