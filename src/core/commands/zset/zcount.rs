// src/core/commands/zset/zcount.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use crate::core::range::ScoreRange;
use bytes::Bytes;

/// Counts members whose scores fall within a range.
#[derive(Debug, Clone, Default)]
pub struct ZCount {
    pub key: Bytes,
    pub range: ScoreRange,
}

impl ZCount {
    pub fn scores_within(key: impl Into<Bytes>, range: ScoreRange) -> Self {
        ZCount {
            key: key.into(),
            range,
        }
    }
}

impl CommandSpec for ZCount {
    fn name(&self) -> &'static str {
        "zcount"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            self.range.min_token()?,
            self.range.max_token()?,
        ])
    }
}
