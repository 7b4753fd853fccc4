// src/client/strings.rs

//! String-family methods on [`Client`].

use crate::client::Client;
use crate::core::commands::string::{
    Append, Get, GetRange, GetSet, MGet, MSet, MSetNx, PSetEx, Set, SetEx, SetNx, SetRange, StrLen,
};
use crate::core::errors::CitrineError;
use crate::driver::Reply;
use bytes::Bytes;

impl Client {
    /// Fetches the value stored at `key`.
    pub async fn get(&self, key: impl Into<Bytes>) -> Result<Option<Bytes>, CitrineError> {
        self.run(&Get::new(key)).await?.into_bulk()
    }

    /// Stores `value` at `key`, replacing any previous value.
    pub async fn set(
        &self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<bool, CitrineError> {
        self.run(&Set::new(key, value)).await?.into_ok()
    }

    /// Executes a fully configured [`Set`] (condition and expiry options).
    ///
    /// Returns `false` when an `NX`/`XX` condition left the key untouched.
    /// The `GET` flag changes the reply shape; use [`Client::set_and_return`]
    /// for that form.
    pub async fn set_with(&self, command: Set) -> Result<bool, CitrineError> {
        if command.get {
            return Err(CitrineError::InvalidRequest(
                "SET ... GET replies with the old value; use set_and_return".into(),
            ));
        }
        self.run(&command).await?.into_ok()
    }

    /// Executes a [`Set`] with the `GET` flag, returning the previous value.
    pub async fn set_and_return(&self, command: Set) -> Result<Option<Bytes>, CitrineError> {
        let command = command.return_old();
        self.run(&command).await?.into_bulk()
    }

    /// Stores `value` at `key` and returns the value it replaced.
    pub async fn getset(
        &self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<Option<Bytes>, CitrineError> {
        self.run(&GetSet::new(key, value)).await?.into_bulk()
    }

    /// Stores `value` only if `key` does not exist yet.
    pub async fn setnx(
        &self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<bool, CitrineError> {
        self.run(&SetNx::new(key, value)).await?.into_flag()
    }

    /// Stores `value` with a time-to-live in seconds.
    pub async fn setex(
        &self,
        key: impl Into<Bytes>,
        seconds: u64,
        value: impl Into<Bytes>,
    ) -> Result<(), CitrineError> {
        self.run(&SetEx::new(key, seconds, value)).await?.into_ok()?;
        Ok(())
    }

    /// Stores `value` with a time-to-live in milliseconds.
    pub async fn psetex(
        &self,
        key: impl Into<Bytes>,
        millis: u64,
        value: impl Into<Bytes>,
    ) -> Result<(), CitrineError> {
        self.run(&PSetEx::new(key, millis, value)).await?.into_ok()?;
        Ok(())
    }

    /// Fetches several values at once; missing keys yield `None` in place.
    pub async fn mget<K, I>(&self, keys: I) -> Result<Vec<Option<Bytes>>, CitrineError>
    where
        K: Into<Bytes>,
        I: IntoIterator<Item = K>,
    {
        let command = MGet::new(keys.into_iter().map(Into::into).collect());
        let items = self.run(&command).await?.into_array()?;
        items.into_iter().map(Reply::into_bulk).collect()
    }

    /// Stores several key-value pairs atomically.
    pub async fn mset<K, V, I>(&self, pairs: I) -> Result<(), CitrineError>
    where
        K: Into<Bytes>,
        V: Into<Bytes>,
        I: IntoIterator<Item = (K, V)>,
    {
        let command = MSet::new(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self.run(&command).await?.into_ok()?;
        Ok(())
    }

    /// Stores several key-value pairs only if none of the keys exist.
    pub async fn msetnx<K, V, I>(&self, pairs: I) -> Result<bool, CitrineError>
    where
        K: Into<Bytes>,
        V: Into<Bytes>,
        I: IntoIterator<Item = (K, V)>,
    {
        let command = MSetNx::new(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self.run(&command).await?.into_flag()
    }

    /// Appends to the value at `key`, returning the new length.
    pub async fn append(
        &self,
        key: impl Into<Bytes>,
        value: impl Into<Bytes>,
    ) -> Result<i64, CitrineError> {
        self.run(&Append::new(key, value)).await?.into_integer()
    }

    /// Length of the value stored at `key` (zero for a missing key).
    pub async fn strlen(&self, key: impl Into<Bytes>) -> Result<i64, CitrineError> {
        self.run(&StrLen::new(key)).await?.into_integer()
    }

    /// A substring of the value between byte offsets `start` and `end`,
    /// both inclusive; empty when the key is missing.
    pub async fn getrange(
        &self,
        key: impl Into<Bytes>,
        start: i64,
        end: i64,
    ) -> Result<Bytes, CitrineError> {
        let reply = self.run(&GetRange::new(key, start, end)).await?;
        Ok(reply.into_bulk()?.unwrap_or_default())
    }

    /// Overwrites part of the value starting at `offset`, returning the
    /// new length.
    pub async fn setrange(
        &self,
        key: impl Into<Bytes>,
        offset: u64,
        value: impl Into<Bytes>,
    ) -> Result<i64, CitrineError> {
        self.run(&SetRange::new(key, offset, value))
            .await?
            .into_integer()
    }
}
