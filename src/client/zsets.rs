// src/client/zsets.rs

//! Sorted-set methods on [`Client`].

use crate::client::{Client, required_bulk};
use crate::core::commands::zset::{
    Limit, ScoredMember, ZAdd, ZCard, ZCount, ZIncrBy, ZInterStore, ZLexCount, ZRange, ZRangeByLex,
    ZRangeByScore, ZRank, ZRem, ZRemRangeByLex, ZRemRangeByRank, ZRemRangeByScore, ZScore,
    ZUnionStore,
};
use crate::core::errors::CitrineError;
use crate::core::range::{LexRange, RankRange, ScoreRange};
use crate::driver::Reply;
use bytes::Bytes;

/// Shapes a plain member-array reply.
fn member_list(reply: Reply) -> Result<Vec<Bytes>, CitrineError> {
    reply.into_array()?.into_iter().map(required_bulk).collect()
}

/// Shapes a `WITHSCORES` reply: a flat array alternating member and score.
fn scored_member_list(reply: Reply) -> Result<Vec<ScoredMember>, CitrineError> {
    let items = reply.into_array()?;
    if items.len() % 2 != 0 {
        return Err(CitrineError::UnexpectedReply(
            "WITHSCORES reply with an odd element count".to_string(),
        ));
    }
    let mut members = Vec::with_capacity(items.len() / 2);
    let mut items = items.into_iter();
    while let (Some(member), Some(score)) = (items.next(), items.next()) {
        members.push(ScoredMember {
            member: required_bulk(member)?,
            score: score.into_double()?,
        });
    }
    Ok(members)
}

impl Client {
    /// Adds `member` with `score`, returning the number of members added.
    pub async fn zadd(
        &self,
        key: impl Into<Bytes>,
        score: f64,
        member: impl Into<Bytes>,
    ) -> Result<i64, CitrineError> {
        self.run(&ZAdd::single(key, score, member))
            .await?
            .into_integer()
    }

    /// Adds several `(score, member)` pairs at once.
    pub async fn zadd_multi(
        &self,
        key: impl Into<Bytes>,
        members: Vec<(f64, Bytes)>,
    ) -> Result<i64, CitrineError> {
        self.run(&ZAdd::new(key, members)).await?.into_integer()
    }

    /// Executes a fully configured [`ZAdd`] (conditions, update rules, CH).
    ///
    /// INCR-mode commands reply with a score instead of a count; use
    /// [`Client::zadd_incr`] for that form.
    pub async fn zadd_with(&self, command: ZAdd) -> Result<i64, CitrineError> {
        if command.incr {
            return Err(CitrineError::InvalidRequest(
                "INCR-mode ZADD replies with a score; use zadd_incr".into(),
            ));
        }
        self.run(&command).await?.into_integer()
    }

    /// Increments `member`'s score through `ZADD ... INCR`, returning the
    /// new score, or `None` when an `NX`/`XX` condition aborted the update.
    pub async fn zadd_incr(
        &self,
        key: impl Into<Bytes>,
        increment: f64,
        member: impl Into<Bytes>,
    ) -> Result<Option<f64>, CitrineError> {
        let command = ZAdd::single(key, increment, member).incr();
        self.run(&command).await?.into_opt_double()
    }

    /// Removes `member`, returning the number of members removed.
    pub async fn zrem(
        &self,
        key: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<i64, CitrineError> {
        self.run(&ZRem::single(key, member)).await?.into_integer()
    }

    /// Removes several members in one round trip.
    pub async fn zrem_many<M, I>(&self, key: impl Into<Bytes>, members: I) -> Result<i64, CitrineError>
    where
        M: Into<Bytes>,
        I: IntoIterator<Item = M>,
    {
        let command = ZRem::new(key, members.into_iter().map(Into::into).collect());
        self.run(&command).await?.into_integer()
    }

    /// Increments `member`'s score by `increment`, returning the new score.
    pub async fn zincrby(
        &self,
        key: impl Into<Bytes>,
        increment: f64,
        member: impl Into<Bytes>,
    ) -> Result<f64, CitrineError> {
        self.run(&ZIncrBy::new(key, increment, member))
            .await?
            .into_double()
    }

    /// `member`'s index when scored low to high; `None` when missing.
    pub async fn zrank(
        &self,
        key: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<Option<i64>, CitrineError> {
        self.run(&ZRank::index_of(key, member))
            .await?
            .into_opt_integer()
    }

    /// `member`'s index when scored high to low; `None` when missing.
    pub async fn zrevrank(
        &self,
        key: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<Option<i64>, CitrineError> {
        self.run(&ZRank::reverse_index_of(key, member))
            .await?
            .into_opt_integer()
    }

    /// `member`'s score; `None` when the member or key is missing.
    pub async fn zscore(
        &self,
        key: impl Into<Bytes>,
        member: impl Into<Bytes>,
    ) -> Result<Option<f64>, CitrineError> {
        self.run(&ZScore::new(key, member)).await?.into_opt_double()
    }

    /// The number of members in the set.
    pub async fn zcard(&self, key: impl Into<Bytes>) -> Result<i64, CitrineError> {
        self.run(&ZCard::new(key)).await?.into_integer()
    }

    /// Counts members whose scores fall within `range`.
    pub async fn zcount(
        &self,
        key: impl Into<Bytes>,
        range: ScoreRange,
    ) -> Result<i64, CitrineError> {
        self.run(&ZCount::scores_within(key, range))
            .await?
            .into_integer()
    }

    /// Counts members within the lexicographical `range`.
    pub async fn zlexcount(
        &self,
        key: impl Into<Bytes>,
        range: LexRange,
    ) -> Result<i64, CitrineError> {
        self.run(&ZLexCount::values_within(key, range))
            .await?
            .into_integer()
    }

    /// Members by rank, lowest scores first.
    pub async fn zrange(
        &self,
        key: impl Into<Bytes>,
        range: RankRange,
    ) -> Result<Vec<Bytes>, CitrineError> {
        member_list(self.run(&ZRange::values_within(key, range)).await?)
    }

    /// Members by rank with their scores, lowest scores first.
    pub async fn zrange_with_scores(
        &self,
        key: impl Into<Bytes>,
        range: RankRange,
    ) -> Result<Vec<ScoredMember>, CitrineError> {
        let command = ZRange::values_within(key, range).with_scores();
        scored_member_list(self.run(&command).await?)
    }

    /// Members by rank, highest scores first.
    pub async fn zrevrange(
        &self,
        key: impl Into<Bytes>,
        range: RankRange,
    ) -> Result<Vec<Bytes>, CitrineError> {
        member_list(self.run(&ZRange::reverse_values_within(key, range)).await?)
    }

    /// Members by rank with their scores, highest scores first.
    pub async fn zrevrange_with_scores(
        &self,
        key: impl Into<Bytes>,
        range: RankRange,
    ) -> Result<Vec<ScoredMember>, CitrineError> {
        let command = ZRange::reverse_values_within(key, range).with_scores();
        scored_member_list(self.run(&command).await?)
    }

    /// Members whose scores fall within `range`, lowest first.
    pub async fn zrange_by_score(
        &self,
        key: impl Into<Bytes>,
        range: ScoreRange,
        limit: Option<Limit>,
    ) -> Result<Vec<Bytes>, CitrineError> {
        let mut command = ZRangeByScore::scores_within(key, range);
        if let Some(limit) = limit {
            command = command.limit_to(limit);
        }
        member_list(self.run(&command).await?)
    }

    /// Members and scores within `range`, lowest first.
    pub async fn zrange_by_score_with_scores(
        &self,
        key: impl Into<Bytes>,
        range: ScoreRange,
        limit: Option<Limit>,
    ) -> Result<Vec<ScoredMember>, CitrineError> {
        let mut command = ZRangeByScore::scores_within(key, range).with_scores();
        if let Some(limit) = limit {
            command = command.limit_to(limit);
        }
        scored_member_list(self.run(&command).await?)
    }

    /// Members whose scores fall within `range`, highest first.
    pub async fn zrevrange_by_score(
        &self,
        key: impl Into<Bytes>,
        range: ScoreRange,
        limit: Option<Limit>,
    ) -> Result<Vec<Bytes>, CitrineError> {
        let mut command = ZRangeByScore::reverse_scores_within(key, range);
        if let Some(limit) = limit {
            command = command.limit_to(limit);
        }
        member_list(self.run(&command).await?)
    }

    /// Members and scores within `range`, highest first.
    pub async fn zrevrange_by_score_with_scores(
        &self,
        key: impl Into<Bytes>,
        range: ScoreRange,
        limit: Option<Limit>,
    ) -> Result<Vec<ScoredMember>, CitrineError> {
        let mut command = ZRangeByScore::reverse_scores_within(key, range).with_scores();
        if let Some(limit) = limit {
            command = command.limit_to(limit);
        }
        scored_member_list(self.run(&command).await?)
    }

    /// Members within the lexicographical `range`, in set order.
    pub async fn zrange_by_lex(
        &self,
        key: impl Into<Bytes>,
        range: LexRange,
        limit: Option<Limit>,
    ) -> Result<Vec<Bytes>, CitrineError> {
        let mut command = ZRangeByLex::values_within(key, range);
        if let Some(limit) = limit {
            command = command.limit_to(limit);
        }
        member_list(self.run(&command).await?)
    }

    /// Members within the lexicographical `range`, in reverse set order.
    pub async fn zrevrange_by_lex(
        &self,
        key: impl Into<Bytes>,
        range: LexRange,
        limit: Option<Limit>,
    ) -> Result<Vec<Bytes>, CitrineError> {
        let mut command = ZRangeByLex::reverse_values_within(key, range);
        if let Some(limit) = limit {
            command = command.limit_to(limit);
        }
        member_list(self.run(&command).await?)
    }

    /// Removes members by rank, returning the number removed.
    pub async fn zremrange_by_rank(
        &self,
        key: impl Into<Bytes>,
        range: RankRange,
    ) -> Result<i64, CitrineError> {
        self.run(&ZRemRangeByRank::values_within(key, range))
            .await?
            .into_integer()
    }

    /// Removes members whose scores fall within `range`.
    pub async fn zremrange_by_score(
        &self,
        key: impl Into<Bytes>,
        range: ScoreRange,
    ) -> Result<i64, CitrineError> {
        self.run(&ZRemRangeByScore::scores_within(key, range))
            .await?
            .into_integer()
    }

    /// Removes members within the lexicographical `range`.
    pub async fn zremrange_by_lex(
        &self,
        key: impl Into<Bytes>,
        range: LexRange,
    ) -> Result<i64, CitrineError> {
        self.run(&ZRemRangeByLex::values_within(key, range))
            .await?
            .into_integer()
    }

    /// Unions `keys` into `destination`, returning the result size.
    pub async fn zunionstore(
        &self,
        destination: impl Into<Bytes>,
        keys: Vec<Bytes>,
    ) -> Result<i64, CitrineError> {
        self.run(&ZUnionStore::new(destination, keys))
            .await?
            .into_integer()
    }

    /// Executes a fully configured [`ZUnionStore`] (weights, aggregation).
    pub async fn zunionstore_with(&self, command: ZUnionStore) -> Result<i64, CitrineError> {
        self.run(&command).await?.into_integer()
    }

    /// Intersects `keys` into `destination`, returning the result size.
    pub async fn zinterstore(
        &self,
        destination: impl Into<Bytes>,
        keys: Vec<Bytes>,
    ) -> Result<i64, CitrineError> {
        self.run(&ZInterStore::new(destination, keys))
            .await?
            .into_integer()
    }

    /// Executes a fully configured [`ZInterStore`] (weights, aggregation).
    pub async fn zinterstore_with(&self, command: ZInterStore) -> Result<i64, CitrineError> {
        self.run(&command).await?.into_integer()
    }
}
