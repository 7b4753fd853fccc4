// src/core/commands/generic/del.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Deletes one or more keys, replying with the number removed.
#[derive(Debug, Clone, Default)]
pub struct Del {
    pub keys: Vec<Bytes>,
}

impl Del {
    pub fn single(key: impl Into<Bytes>) -> Self {
        Del {
            keys: vec![key.into()],
        }
    }

    pub fn new(keys: Vec<Bytes>) -> Self {
        Del { keys }
    }
}

impl CommandSpec for Del {
    fn name(&self) -> &'static str {
        "del"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        if self.keys.is_empty() {
            return Err(CitrineError::WrongArgumentCount("DEL".to_string()));
        }
        Ok(self.keys.clone())
    }
}
