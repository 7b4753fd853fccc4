// src/core/commands/zset/zrangebylex.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_int;
use crate::core::commands::zset::{Direction, Limit};
use crate::core::errors::CitrineError;
use crate::core::range::LexRange;
use bytes::Bytes;

/// Fetches members within a lexicographical range, optionally limited.
#[derive(Debug, Clone, Default)]
pub struct ZRangeByLex {
    pub key: Bytes,
    pub range: LexRange,
    pub limit: Option<Limit>,
    pub direction: Direction,
}

impl ZRangeByLex {
    pub fn values_within(key: impl Into<Bytes>, range: LexRange) -> Self {
        ZRangeByLex {
            key: key.into(),
            range,
            ..Default::default()
        }
    }

    pub fn reverse_values_within(key: impl Into<Bytes>, range: LexRange) -> Self {
        ZRangeByLex {
            key: key.into(),
            range,
            direction: Direction::Desc,
            ..Default::default()
        }
    }

    pub fn limit_to(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl CommandSpec for ZRangeByLex {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Asc => "zrangebylex",
            Direction::Desc => "zrevrangebylex",
        }
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        // The reverse form takes its boundaries max-first.
        let (first, second) = match self.direction {
            Direction::Asc => (self.range.min_token(), self.range.max_token()),
            Direction::Desc => (self.range.max_token(), self.range.min_token()),
        };
        let mut args = vec![self.key.clone(), first, second];
        if let Some(limit) = &self.limit {
            args.push("LIMIT".into());
            args.push(fmt_int(limit.offset));
            args.push(fmt_int(limit.count));
        }
        Ok(args)
    }
}
