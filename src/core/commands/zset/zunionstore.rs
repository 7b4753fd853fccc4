// src/core/commands/zset/zunionstore.rs

use super::helpers::store_args;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::zset::Aggregate;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Unions source sets into a destination key, replying with the size of
/// the result.
#[derive(Debug, Clone, Default)]
pub struct ZUnionStore {
    pub destination: Bytes,
    pub keys: Vec<Bytes>,
    pub weights: Vec<f64>,
    pub aggregate: Aggregate,
}

impl ZUnionStore {
    pub fn new(destination: impl Into<Bytes>, keys: Vec<Bytes>) -> Self {
        ZUnionStore {
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

impl CommandSpec for ZUnionStore {
    fn name(&self) -> &'static str {
        "zunionstore"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        store_args(
            "ZUNIONSTORE",
            &self.destination,
            &self.keys,
            &self.weights,
            self.aggregate,
        )
    }
}
