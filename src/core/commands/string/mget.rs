// src/core/commands/string/mget.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Fetches multiple values in one round trip.
#[derive(Debug, Clone, Default)]
pub struct MGet {
    pub keys: Vec<Bytes>,
}

impl MGet {
    pub fn new(keys: Vec<Bytes>) -> Self {
        MGet { keys }
    }
}

impl CommandSpec for MGet {
    fn name(&self) -> &'static str {
        "mget"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        if self.keys.is_empty() {
            return Err(CitrineError::WrongArgumentCount("MGET".to_string()));
        }
        Ok(self.keys.clone())
    }
}
