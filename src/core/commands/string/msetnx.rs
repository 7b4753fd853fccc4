// src/core/commands/string/msetnx.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Stores multiple key-value pairs only if none of the keys exist.
#[derive(Debug, Clone, Default)]
pub struct MSetNx {
    pub pairs: Vec<(Bytes, Bytes)>,
}

impl MSetNx {
    pub fn new(pairs: Vec<(Bytes, Bytes)>) -> Self {
        MSetNx { pairs }
    }
}

impl CommandSpec for MSetNx {
    fn name(&self) -> &'static str {
        "msetnx"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        if self.pairs.is_empty() {
            return Err(CitrineError::WrongArgumentCount("MSETNX".to_string()));
        }
        Ok(self
            .pairs
            .iter()
            .flat_map(|(key, value)| [key.clone(), value.clone()])
            .collect())
    }
}
