// src/core/commands/string/psetex.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_uint;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Stores a value with a time-to-live in milliseconds.
#[derive(Debug, Clone, Default)]
pub struct PSetEx {
    pub key: Bytes,
    pub millis: u64,
    pub value: Bytes,
}

impl PSetEx {
    pub fn new(key: impl Into<Bytes>, millis: u64, value: impl Into<Bytes>) -> Self {
        PSetEx {
            key: key.into(),
            millis,
            value: value.into(),
        }
    }
}

impl CommandSpec for PSetEx {
    fn name(&self) -> &'static str {
        "psetex"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            fmt_uint(self.millis),
            self.value.clone(),
        ])
    }
}
