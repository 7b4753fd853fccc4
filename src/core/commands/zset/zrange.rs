// src/core/commands/zset/zrange.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::zset::Direction;
use crate::core::errors::CitrineError;
use crate::core::range::RankRange;
use bytes::Bytes;

/// Fetches members by rank, optionally paired with their scores.
///
/// Rank indexes address positions in the traversal order, so the reverse
/// form keeps `start stop` as-is; only the wire name changes.
#[derive(Debug, Clone, Default)]
pub struct ZRange {
    pub key: Bytes,
    pub range: RankRange,
    pub with_scores: bool,
    pub direction: Direction,
}

impl ZRange {
    pub fn values_within(key: impl Into<Bytes>, range: RankRange) -> Self {
        ZRange {
            key: key.into(),
            range,
            ..Default::default()
        }
    }

    pub fn reverse_values_within(key: impl Into<Bytes>, range: RankRange) -> Self {
        ZRange {
            key: key.into(),
            range,
            direction: Direction::Desc,
            ..Default::default()
        }
    }

    pub fn with_scores(mut self) -> Self {
        self.with_scores = true;
        self
    }
}

impl CommandSpec for ZRange {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Asc => "zrange",
            Direction::Desc => "zrevrange",
        }
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        let mut args = vec![
            self.key.clone(),
            self.range.start_token(),
            self.range.stop_token(),
        ];
        if self.with_scores {
            args.push("WITHSCORES".into());
        }
        Ok(args)
    }
}
