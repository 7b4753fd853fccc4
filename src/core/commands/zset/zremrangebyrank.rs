// src/core/commands/zset/zremrangebyrank.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use crate::core::range::RankRange;
use bytes::Bytes;

/// Removes members by rank, replying with the number removed.
#[derive(Debug, Clone, Default)]
pub struct ZRemRangeByRank {
    pub key: Bytes,
    pub range: RankRange,
}

impl ZRemRangeByRank {
    pub fn values_within(key: impl Into<Bytes>, range: RankRange) -> Self {
        ZRemRangeByRank {
            key: key.into(),
            range,
        }
    }
}

impl CommandSpec for ZRemRangeByRank {
    fn name(&self) -> &'static str {
        "zremrangebyrank"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            self.range.start_token(),
            self.range.stop_token(),
        ])
    }
}
