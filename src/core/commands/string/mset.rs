// src/core/commands/string/mset.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Stores multiple key-value pairs in one round trip.
#[derive(Debug, Clone, Default)]
pub struct MSet {
    pub pairs: Vec<(Bytes, Bytes)>,
}

impl MSet {
    pub fn new(pairs: Vec<(Bytes, Bytes)>) -> Self {
        MSet { pairs }
    }
}

impl CommandSpec for MSet {
    fn name(&self) -> &'static str {
        "mset"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        if self.pairs.is_empty() {
            return Err(CitrineError::WrongArgumentCount("MSET".to_string()));
        }
        Ok(self
            .pairs
            .iter()
            .flat_map(|(key, value)| [key.clone(), value.clone()])
            .collect())
    }
}
