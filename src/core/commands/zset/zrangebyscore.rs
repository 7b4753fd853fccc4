// src/core/commands/zset/zrangebyscore.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_int;
use crate::core::commands::zset::{Direction, Limit};
use crate::core::errors::CitrineError;
use crate::core::range::ScoreRange;
use bytes::Bytes;

/// Fetches members whose scores fall within a range, optionally limited
/// and paired with their scores.
#[derive(Debug, Clone, Default)]
pub struct ZRangeByScore {
    pub key: Bytes,
    pub range: ScoreRange,
    pub with_scores: bool,
    pub limit: Option<Limit>,
    pub direction: Direction,
}

impl ZRangeByScore {
    pub fn scores_within(key: impl Into<Bytes>, range: ScoreRange) -> Self {
        ZRangeByScore {
            key: key.into(),
            range,
            ..Default::default()
        }
    }

    pub fn reverse_scores_within(key: impl Into<Bytes>, range: ScoreRange) -> Self {
        ZRangeByScore {
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

    pub fn limit_to(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl CommandSpec for ZRangeByScore {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Asc => "zrangebyscore",
            Direction::Desc => "zrevrangebyscore",
        }
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        // The reverse form takes its boundaries max-first.
        let (first, second) = match self.direction {
            Direction::Asc => (self.range.min_token()?, self.range.max_token()?),
            Direction::Desc => (self.range.max_token()?, self.range.min_token()?),
        };
        let mut args = vec![self.key.clone(), first, second];
        if self.with_scores {
            args.push("WITHSCORES".into());
        }
        if let Some(limit) = &self.limit {
            args.push("LIMIT".into());
            args.push(fmt_int(limit.offset));
            args.push(fmt_int(limit.count));
        }
        Ok(args)
    }
}
