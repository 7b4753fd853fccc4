// src/core/commands/zset/mod.rs

//! Sorted-set command values and their shared option types.

pub mod helpers;
pub mod zadd;
pub mod zcard;
pub mod zcount;
pub mod zincrby;
pub mod zinterstore;
pub mod zlexcount;
pub mod zrange;
pub mod zrangebylex;
pub mod zrangebyscore;
pub mod zrank;
pub mod zrem;
pub mod zremrangebylex;
pub mod zremrangebyrank;
pub mod zremrangebyscore;
pub mod zscore;
pub mod zunionstore;

pub use zadd::{ZAdd, ZaddCondition, ZaddUpdateRule};
pub use zcard::ZCard;
pub use zcount::ZCount;
pub use zincrby::ZIncrBy;
pub use zinterstore::ZInterStore;
pub use zlexcount::ZLexCount;
pub use zrange::ZRange;
pub use zrangebylex::ZRangeByLex;
pub use zrangebyscore::ZRangeByScore;
pub use zrank::ZRank;
pub use zrem::ZRem;
pub use zremrangebylex::ZRemRangeByLex;
pub use zremrangebyrank::ZRemRangeByRank;
pub use zremrangebyscore::ZRemRangeByScore;
pub use zscore::ZScore;
pub use zunionstore::ZUnionStore;

use bytes::Bytes;

/// Traversal order for rank- and score-based queries.
///
/// Descending queries use the `zrev*` wire names; for by-score and by-lex
/// variants the server also expects the boundary tokens in swapped order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Pagination for range queries (`LIMIT offset count`).
///
/// A negative `count` means "all remaining", as the server defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limit {
    pub offset: i64,
    pub count: i64,
}

impl Limit {
    pub fn new(offset: i64, count: i64) -> Self {
        Limit { offset, count }
    }
}

/// Score aggregation for the set-combination commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregate {
    #[default]
    Sum,
    Min,
    Max,
}

/// A member paired with its score, as returned by `WITHSCORES` queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMember {
    pub member: Bytes,
    pub score: f64,
}

impl ScoredMember {
    pub fn new(member: impl Into<Bytes>, score: f64) -> Self {
        ScoredMember {
            member: member.into(),
            score,
        }
    }
}
