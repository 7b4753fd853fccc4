// src/core/commands/zset/zremrangebyscore.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use crate::core::range::ScoreRange;
use bytes::Bytes;

/// Removes members whose scores fall within a range, replying with the
/// number removed.
#[derive(Debug, Clone, Default)]
pub struct ZRemRangeByScore {
    pub key: Bytes,
    pub range: ScoreRange,
}

impl ZRemRangeByScore {
    pub fn scores_within(key: impl Into<Bytes>, range: ScoreRange) -> Self {
        ZRemRangeByScore {
            key: key.into(),
            range,
        }
    }
}

impl CommandSpec for ZRemRangeByScore {
    fn name(&self) -> &'static str {
        "zremrangebyscore"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            self.range.min_token()?,
            self.range.max_token()?,
        ])
    }
}
