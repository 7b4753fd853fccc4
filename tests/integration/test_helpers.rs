// tests/integration/test_helpers.rs

//! Shared helpers for the stub-driver test suite.

use async_trait::async_trait;
use bytes::Bytes;
use citrine_client::{CitrineError, Client, Driver, Reply};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Installs a per-process subscriber so `RUST_LOG` works in test runs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// A scripted driver: plays back queued replies in order and records every
/// dispatch. With no queued reply it answers `Null`.
pub struct StubDriver {
    replies: Mutex<VecDeque<Result<Reply, CitrineError>>>,
    calls: Mutex<Vec<(String, Vec<Bytes>)>>,
    delay: Option<Duration>,
}

impl StubDriver {
    pub fn new() -> Arc<Self> {
        Arc::new(StubDriver {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        })
    }

    /// A driver that sleeps before answering, for timeout tests.
    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(StubDriver {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            delay: Some(delay),
        })
    }

    pub fn enqueue(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    pub fn enqueue_error(&self, error: CitrineError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<(String, Vec<Bytes>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Driver for StubDriver {
    async fn dispatch(
        &self,
        name: &'static str,
        args: Vec<Bytes>,
    ) -> Result<Reply, CitrineError> {
        self.calls.lock().unwrap().push((name.to_string(), args));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Reply::Null))
    }
}

/// A client over a fresh stub driver.
pub struct TestContext {
    pub client: Client,
    pub driver: Arc<StubDriver>,
}

impl TestContext {
    pub fn new() -> Self {
        init_tracing();
        let driver = StubDriver::new();
        TestContext {
            client: Client::new(driver.clone()),
            driver,
        }
    }
}
