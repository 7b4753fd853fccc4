// tests/integration/zsets_test.rs

use super::test_helpers::TestContext;
use bytes::Bytes;
use citrine_client::core::commands::zset::{Aggregate, ScoredMember, ZUnionStore};
use citrine_client::core::range::{RankRange, ScoreBound, ScoreRange};
use citrine_client::{CitrineError, Reply};

#[tokio::test]
async fn test_zadd_and_zscore() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(1));
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"3.25")));

    assert_eq!(ctx.client.zadd("board", 3.25, "player-1").await.unwrap(), 1);
    assert_eq!(
        ctx.client.zscore("board", "player-1").await.unwrap(),
        Some(3.25)
    );

    let calls = ctx.driver.calls();
    assert_eq!(
        calls[0].1,
        vec![
            Bytes::from_static(b"board"),
            Bytes::from_static(b"3.25"),
            Bytes::from_static(b"player-1"),
        ]
    );
}

#[tokio::test]
async fn test_zscore_missing_member() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Null);
    assert_eq!(ctx.client.zscore("board", "ghost").await.unwrap(), None);
}

#[tokio::test]
async fn test_zrank_and_zrevrank() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(0));
    ctx.driver.enqueue(Reply::Null);

    assert_eq!(ctx.client.zrank("board", "player-1").await.unwrap(), Some(0));
    assert_eq!(ctx.client.zrevrank("board", "ghost").await.unwrap(), None);

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].0, "zrank");
    assert_eq!(calls[1].0, "zrevrank");
}

#[tokio::test]
async fn test_zincrby_parses_new_score() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"7.5")));
    assert_eq!(
        ctx.client.zincrby("board", 2.5, "player-1").await.unwrap(),
        7.5
    );
}

#[tokio::test]
async fn test_zadd_incr_aborted_by_condition() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Null);
    let new_score = ctx.client.zadd_incr("board", 1.0, "ghost").await.unwrap();
    assert_eq!(new_score, None);
}

#[tokio::test]
async fn test_zrange_with_scores_pairs_members() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Array(vec![
        Reply::Bulk(Bytes::from_static(b"player-1")),
        Reply::Bulk(Bytes::from_static(b"1.0")),
        Reply::Bulk(Bytes::from_static(b"player-2")),
        Reply::Bulk(Bytes::from_static(b"2.5")),
    ]));

    let members = ctx
        .client
        .zrange_with_scores("board", RankRange::all())
        .await
        .unwrap();
    assert_eq!(
        members,
        vec![
            ScoredMember::new("player-1", 1.0),
            ScoredMember::new("player-2", 2.5),
        ]
    );
}

#[tokio::test]
async fn test_withscores_odd_reply_is_rejected() {
    let ctx = TestContext::new();
    ctx.driver
        .enqueue(Reply::Array(vec![Reply::Bulk(Bytes::from_static(
            b"player-1",
        ))]));

    let err = ctx
        .client
        .zrange_with_scores("board", RankRange::all())
        .await
        .unwrap_err();
    assert!(matches!(err, CitrineError::UnexpectedReply(_)));
}

#[tokio::test]
async fn test_zrange_by_score_encodes_bounds() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Array(vec![]));

    let range = ScoreRange::new(ScoreBound::NegInfinity, ScoreBound::Exclusive(10.0));
    let members = ctx
        .client
        .zrange_by_score("board", range, None)
        .await
        .unwrap();
    assert!(members.is_empty());

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].0, "zrangebyscore");
    assert_eq!(
        calls[0].1,
        vec![
            Bytes::from_static(b"board"),
            Bytes::from_static(b"-inf"),
            Bytes::from_static(b"(10.0"),
        ]
    );
}

#[tokio::test]
async fn test_zcount_unbounded() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(42));

    let count = ctx
        .client
        .zcount("board", ScoreRange::unbounded())
        .await
        .unwrap();
    assert_eq!(count, 42);

    let calls = ctx.driver.calls();
    assert_eq!(
        calls[0].1,
        vec![
            Bytes::from_static(b"board"),
            Bytes::from_static(b"-inf"),
            Bytes::from_static(b"+inf"),
        ]
    );
}

#[tokio::test]
async fn test_zunionstore_with_weights() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(3));

    let command = ZUnionStore::new(
        "combined",
        vec![Bytes::from_static(b"set-a"), Bytes::from_static(b"set-b")],
    )
    .apply_weights(vec![2.0, 3.0])
    .aggregate_using(Aggregate::Max);

    let size = ctx.client.zunionstore_with(command).await.unwrap();
    assert_eq!(size, 3);

    let calls = ctx.driver.calls();
    assert!(calls[0].1.contains(&Bytes::from_static(b"WEIGHTS")));
    assert!(calls[0].1.contains(&Bytes::from_static(b"MAX")));
}

#[tokio::test]
async fn test_zremrange_by_score() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(5));

    let removed = ctx
        .client
        .zremrange_by_score("board", ScoreRange::closed(0.0, 10.0))
        .await
        .unwrap();
    assert_eq!(removed, 5);
    assert_eq!(ctx.driver.calls()[0].0, "zremrangebyscore");
}
