// src/core/commands/zset/zincrby.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_score;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Increments a member's score, replying with the new score.
#[derive(Debug, Clone, Default)]
pub struct ZIncrBy {
    pub key: Bytes,
    pub increment: f64,
    pub member: Bytes,
}

impl ZIncrBy {
    pub fn new(key: impl Into<Bytes>, increment: f64, member: impl Into<Bytes>) -> Self {
        ZIncrBy {
            key: key.into(),
            increment,
            member: member.into(),
        }
    }
}

impl CommandSpec for ZIncrBy {
    fn name(&self) -> &'static str {
        "zincrby"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            fmt_score(self.increment),
            self.member.clone(),
        ])
    }
}
