// src/core/commands/zset/zinterstore.rs

use super::helpers::store_args;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::zset::Aggregate;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Intersects source sets into a destination key, replying with the size
/// of the result.
#[derive(Debug, Clone, Default)]
pub struct ZInterStore {
    pub destination: Bytes,
    pub keys: Vec<Bytes>,
    pub weights: Vec<f64>,
    pub aggregate: Aggregate,
}

impl ZInterStore {
    pub fn new(destination: impl Into<Bytes>, keys: Vec<Bytes>) -> Self {
        ZInterStore {
            destination: destination.into(),
            keys,
            ..Default::default()
        }
    }

    /// Weight each source set; the list must match the key count.
    pub fn apply_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    pub fn aggregate_using(mut self, aggregate: Aggregate) -> Self {
        self.aggregate = aggregate;
        self
    }
}

impl CommandSpec for ZInterStore {
    fn name(&self) -> &'static str {
        "zinterstore"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        store_args(
            "ZINTERSTORE",
            &self.destination,
            &self.keys,
            &self.weights,
            self.aggregate,
        )
    }
}
