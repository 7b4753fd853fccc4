// src/core/commands/string/setex.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_uint;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Stores a value with a time-to-live in seconds.
#[derive(Debug, Clone, Default)]
pub struct SetEx {
    pub key: Bytes,
    pub seconds: u64,
    pub value: Bytes,
}

impl SetEx {
    pub fn new(key: impl Into<Bytes>, seconds: u64, value: impl Into<Bytes>) -> Self {
        SetEx {
            key: key.into(),
            seconds,
            value: value.into(),
        }
    }
}

impl CommandSpec for SetEx {
    fn name(&self) -> &'static str {
        "setex"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            fmt_uint(self.seconds),
            self.value.clone(),
        ])
    }
}
