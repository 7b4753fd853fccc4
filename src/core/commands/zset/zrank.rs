// src/core/commands/zset/zrank.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::zset::Direction;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// A member's index within the set's traversal order.
#[derive(Debug, Clone, Default)]
pub struct ZRank {
    pub key: Bytes,
    pub member: Bytes,
    pub direction: Direction,
}

impl ZRank {
    /// Index when scored low to high.
    pub fn index_of(key: impl Into<Bytes>, member: impl Into<Bytes>) -> Self {
        ZRank {
            key: key.into(),
            member: member.into(),
            direction: Direction::Asc,
        }
    }

    /// Index when scored high to low.
    pub fn reverse_index_of(key: impl Into<Bytes>, member: impl Into<Bytes>) -> Self {
        ZRank {
            key: key.into(),
            member: member.into(),
            direction: Direction::Desc,
        }
    }
}

impl CommandSpec for ZRank {
    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Asc => "zrank",
            Direction::Desc => "zrevrank",
        }
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.member.clone()])
    }
}
