// src/client/mod.rs

//! The asynchronous client facade.
//!
//! `Client` pairs a [`Driver`] with the typed command values: every method
//! builds a command, dispatches it, and shapes the reply into a typed
//! result. The one-per-family method sets live in the sibling modules;
//! this module holds the dispatch machinery they share.

mod keys;
mod strings;
mod zsets;

use crate::config::ClientConfig;
use crate::core::commands::CommandSpec;
use crate::core::errors::CitrineError;
use crate::driver::{Driver, Reply};
use async_stream::try_stream;
use bytes::Bytes;
use futures::{Stream, pin_mut};
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tokio_stream::StreamExt;
use tracing::{debug, warn};

/// A command paired with the reply it produced, yielded by
/// [`Client::run_many`].
#[derive(Debug, Clone)]
pub struct CommandResponse<C> {
    pub command: C,
    pub reply: Reply,
}

/// An asynchronous handle to the store.
///
/// `Client` is cheap to clone and safe to share: it owns no connection
/// state of its own, only the driver handle and the configured command
/// timeout.
#[derive(Clone)]
pub struct Client {
    driver: Arc<dyn Driver>,
    command_timeout: Option<Duration>,
}

impl Client {
    /// Creates a client over `driver` with no command timeout.
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Client {
            driver,
            command_timeout: None,
        }
    }

    /// Creates a client over `driver`, honoring `config.command_timeout`.
    pub fn with_config(driver: Arc<dyn Driver>, config: &ClientConfig) -> Self {
        Client {
            driver,
            command_timeout: config.command_timeout,
        }
    }

    /// Sends a single typed command and returns its raw reply.
    ///
    /// Every typed method goes through here; it is also the escape hatch
    /// for caller-defined `CommandSpec` values.
    pub async fn run<C: CommandSpec>(&self, command: &C) -> Result<Reply, CitrineError> {
        let name = command.name();
        let args = command.to_args()?;
        debug!("dispatching '{}' with {} argument(s)", name, args.len());

        let dispatch = self.driver.dispatch(name, args);
        match self.command_timeout {
            Some(limit) => match time::timeout(limit, dispatch).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("'{}' timed out after {:?}", name, limit);
                    Err(CitrineError::Timeout(name.to_string()))
                }
            },
            None => dispatch.await,
        }
    }

    /// Streams commands to the server one at a time, in order, yielding
    /// each command paired with the reply it produced.
    ///
    /// The output ends when the source ends, or after the first failed
    /// dispatch (the failure is yielded as the final item).
    pub fn run_many<'a, C, S>(
        &'a self,
        commands: S,
    ) -> impl Stream<Item = Result<CommandResponse<C>, CitrineError>> + 'a
    where
        C: CommandSpec + 'a,
        S: Stream<Item = C> + 'a,
    {
        try_stream! {
            pin_mut!(commands);
            while let Some(command) = commands.next().await {
                let reply = self.run(&command).await?;
                yield CommandResponse { command, reply };
            }
        }
    }
}

/// An array element that must be present and bulk (member and key lists).
pub(crate) fn required_bulk(reply: Reply) -> Result<Bytes, CitrineError> {
    reply.into_bulk()?.ok_or_else(|| {
        CitrineError::UnexpectedReply("null element in a non-null array reply".to_string())
    })
}
