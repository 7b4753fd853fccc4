// tests/integration/streaming_test.rs

use super::test_helpers::{StubDriver, TestContext};
use bytes::Bytes;
use citrine_client::core::commands::string::Get;
use citrine_client::{CitrineError, Client, ClientConfig, Reply};
use futures::StreamExt;
use std::time::Duration;

#[tokio::test]
async fn test_run_many_pairs_commands_with_replies() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"one")));
    ctx.driver.enqueue(Reply::Null);
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"three")));

    let commands = futures::stream::iter(vec![Get::new("a"), Get::new("b"), Get::new("c")]);
    let responses: Vec<_> = ctx.client.run_many(commands).collect().await;

    assert_eq!(responses.len(), 3);
    let first = responses[0].as_ref().unwrap();
    assert_eq!(first.command.key, Bytes::from_static(b"a"));
    assert_eq!(first.reply, Reply::Bulk(Bytes::from_static(b"one")));
    assert_eq!(responses[1].as_ref().unwrap().reply, Reply::Null);

    let calls = ctx.driver.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[2].1, vec![Bytes::from_static(b"c")]);
}

#[tokio::test]
async fn test_run_many_ends_after_failure() {
    let ctx = TestContext::new();
    ctx.driver.enqueue(Reply::Bulk(Bytes::from_static(b"one")));
    ctx.driver
        .enqueue_error(CitrineError::Server("ERR connection reset".into()));

    let commands = futures::stream::iter(vec![Get::new("a"), Get::new("b"), Get::new("c")]);
    let responses: Vec<_> = ctx.client.run_many(commands).collect().await;

    assert_eq!(responses.len(), 2);
    assert!(responses[0].is_ok());
    assert!(responses[1].is_err());
    // The third command was never dispatched.
    assert_eq!(ctx.driver.calls().len(), 2);
}

#[tokio::test]
async fn test_command_timeout_fires() {
    let driver = StubDriver::with_delay(Duration::from_millis(100));
    let config = ClientConfig {
        command_timeout: Some(Duration::from_millis(10)),
        ..Default::default()
    };
    let client = Client::with_config(driver, &config);

    let err = client.get("slow-key").await.unwrap_err();
    assert_eq!(err, CitrineError::Timeout("get".to_string()));
}

#[tokio::test]
async fn test_no_timeout_without_config() {
    let driver = StubDriver::with_delay(Duration::from_millis(20));
    driver.enqueue(Reply::Bulk(Bytes::from_static(b"slow-but-fine")));
    let client = Client::new(driver);

    let value = client.get("slow-key").await.unwrap();
    assert_eq!(value, Some(Bytes::from_static(b"slow-but-fine")));
}
