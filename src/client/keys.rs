// src/client/keys.rs

//! Key-space methods on [`Client`].

use crate::client::{Client, required_bulk};
use crate::core::commands::generic::{Del, Exists, Keys, KeyType, RandomKey, Rename, RenameNx, Type};
use crate::core::errors::CitrineError;
use bytes::Bytes;

impl Client {
    /// Deletes `key`, returning the number of keys removed (0 or 1).
    pub async fn del(&self, key: impl Into<Bytes>) -> Result<i64, CitrineError> {
        self.run(&Del::single(key)).await?.into_integer()
    }

    /// Deletes several keys in one round trip, returning the number
    /// removed.
    pub async fn del_many<K, I>(&self, keys: I) -> Result<i64, CitrineError>
    where
        K: Into<Bytes>,
        I: IntoIterator<Item = K>,
    {
        let command = Del::new(keys.into_iter().map(Into::into).collect());
        self.run(&command).await?.into_integer()
    }

    /// Tests whether `key` exists.
    pub async fn exists(&self, key: impl Into<Bytes>) -> Result<bool, CitrineError> {
        self.run(&Exists::new(key)).await?.into_flag()
    }

    /// Reports the kind of value stored at `key`.
    pub async fn key_type(&self, key: impl Into<Bytes>) -> Result<KeyType, CitrineError> {
        self.run(&Type::new(key)).await?.into_simple()?.parse()
    }

    /// Lists keys matching a glob-style `pattern`.
    pub async fn keys(&self, pattern: impl Into<Bytes>) -> Result<Vec<Bytes>, CitrineError> {
        let items = self.run(&Keys::new(pattern)).await?.into_array()?;
        items.into_iter().map(required_bulk).collect()
    }

    /// Picks a random key; `None` when the keyspace is empty.
    pub async fn random_key(&self) -> Result<Option<Bytes>, CitrineError> {
        self.run(&RandomKey::new()).await?.into_bulk()
    }

    /// Renames `key` to `new_key`, overwriting any existing target.
    pub async fn rename(
        &self,
        key: impl Into<Bytes>,
        new_key: impl Into<Bytes>,
    ) -> Result<(), CitrineError> {
        self.run(&Rename::new(key, new_key)).await?.into_ok()?;
        Ok(())
    }

    /// Renames `key` to `new_key` only if the target does not exist.
    pub async fn rename_nx(
        &self,
        key: impl Into<Bytes>,
        new_key: impl Into<Bytes>,
    ) -> Result<bool, CitrineError> {
        self.run(&RenameNx::new(key, new_key)).await?.into_flag()
    }
}
