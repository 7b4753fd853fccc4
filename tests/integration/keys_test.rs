// tests/integration/keys_test.rs

use super::test_helpers::TestContext;
use bytes::Bytes;
use citrine_client::Reply;
use citrine_client::core::commands::generic::KeyType;

#[tokio::test]
async fn test_del_many_counts_removals() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(2));

    let removed = ctx.client.del_many(["a", "b", "c"]).await.unwrap();
    assert_eq!(removed, 2);

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].0, "del");
    assert_eq!(calls[0].1.len(), 3);
}

#[tokio::test]
async fn test_exists() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(1));
    ctx.driver.enqueue(Reply::Integer(0));

    assert!(ctx.client.exists("present").await.unwrap());
    assert!(!ctx.client.exists("absent").await.unwrap());
}

#[tokio::test]
async fn test_key_type() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Simple("zset".into()));
    assert_eq!(ctx.client.key_type("board").await.unwrap(), KeyType::ZSet);
}

#[tokio::test]
async fn test_keys_lists_matches() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Array(vec![
        Reply::Bulk(Bytes::from_static(b"user:1")),
        Reply::Bulk(Bytes::from_static(b"user:2")),
    ]));

    let keys = ctx.client.keys("user:*").await.unwrap();
    assert_eq!(
        keys,
        vec![Bytes::from_static(b"user:1"), Bytes::from_static(b"user:2")]
    );
}

#[tokio::test]
async fn test_random_key_on_empty_keyspace() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Null);
    assert_eq!(ctx.client.random_key().await.unwrap(), None);
}

#[tokio::test]
async fn test_rename_and_rename_nx() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Simple("OK".into()));
    ctx.driver.enqueue(Reply::Integer(0));

    ctx.client.rename("old", "new").await.unwrap();
    let applied = ctx.client.rename_nx("old", "taken").await.unwrap();
    assert!(!applied);

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].0, "rename");
    assert_eq!(calls[1].0, "renamenx");
}
