// tests/integration/strings_test.rs

use super::test_helpers::TestContext;
use bytes::Bytes;
use citrine_client::core::commands::string::Set;
use citrine_client::{CitrineError, Reply};

#[tokio::test]
async fn test_set_and_get() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Simple("OK".into()));
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"value-1")));

    assert!(ctx.client.set("key-1", "value-1").await.unwrap());
    let fetched = ctx.client.get("key-1").await.unwrap();
    assert_eq!(fetched, Some(Bytes::from_static(b"value-1")));

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].0, "set");
    assert_eq!(
        calls[0].1,
        vec![Bytes::from_static(b"key-1"), Bytes::from_static(b"value-1")]
    );
    assert_eq!(calls[1].0, "get");
}

#[tokio::test]
async fn test_get_missing_key() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Null);
    assert_eq!(ctx.client.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_conditional_set_not_applied() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Null);

    let applied = ctx
        .client
        .set_with(Set::new("key-1", "value-1").if_not_exists())
        .await
        .unwrap();
    assert!(!applied);

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].1.last().unwrap(), &Bytes::from_static(b"NX"));
}

#[tokio::test]
async fn test_set_with_rejects_get_flag() {
    let ctx = TestContext::new();
    let err = ctx
        .client
        .set_with(Set::new("key-1", "value-1").return_old())
        .await
        .unwrap_err();
    assert!(matches!(err, CitrineError::InvalidRequest(_)));
    assert!(ctx.driver.calls().is_empty());
}

#[tokio::test]
async fn test_set_and_return_yields_old_value() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"old")));

    let old = ctx
        .client
        .set_and_return(Set::new("key-1", "new"))
        .await
        .unwrap();
    assert_eq!(old, Some(Bytes::from_static(b"old")));

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].1.last().unwrap(), &Bytes::from_static(b"GET"));
}

#[tokio::test]
async fn test_mget_maps_missing_to_none() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Array(vec![
        Reply::Bulk(Bytes::from_static(b"one")),
        Reply::Null,
        Reply::Bulk(Bytes::from_static(b"three")),
    ]));

    let values = ctx.client.mget(["a", "b", "c"]).await.unwrap();
    assert_eq!(
        values,
        vec![
            Some(Bytes::from_static(b"one")),
            None,
            Some(Bytes::from_static(b"three")),
        ]
    );
}

#[tokio::test]
async fn test_mset_flattens_pairs() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Simple("OK".into()));

    ctx.client.mset([("a", "1"), ("b", "2")]).await.unwrap();

    let calls = ctx.driver.calls();
    assert_eq!(calls[0].0, "mset");
    assert_eq!(
        calls[0].1,
        vec![
            Bytes::from_static(b"a"),
            Bytes::from_static(b"1"),
            Bytes::from_static(b"b"),
            Bytes::from_static(b"2"),
        ]
    );
}

#[tokio::test]
async fn test_append_and_strlen() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Integer(12));
    ctx.driver.enqueue(Reply::Integer(12));

    assert_eq!(ctx.client.append("key-1", " world").await.unwrap(), 12);
    assert_eq!(ctx.client.strlen("key-1").await.unwrap(), 12);
}

#[tokio::test]
async fn test_getrange_missing_key_is_empty() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Null);
    let slice = ctx.client.getrange("missing", 0, 3).await.unwrap();
    assert!(slice.is_empty());
}

#[tokio::test]
async fn test_server_error_surfaces() {
    let ctx = TestContext::new();
    ctx.driver.enqueue_error(CitrineError::Server(
        "WRONGTYPE Operation against a key holding the wrong kind of value".into(),
    ));

    let err = ctx.client.get("a-list").await.unwrap_err();
    assert!(matches!(err, CitrineError::Server(_)));
}
