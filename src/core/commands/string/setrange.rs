// src/core/commands/string/setrange.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_uint;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Overwrites part of the value starting at a byte offset, replying with
/// the new length.
#[derive(Debug, Clone, Default)]
pub struct SetRange {
    pub key: Bytes,
    pub offset: u64,
    pub value: Bytes,
}

impl SetRange {
    pub fn new(key: impl Into<Bytes>, offset: u64, value: impl Into<Bytes>) -> Self {
        SetRange {
            key: key.into(),
            offset,
            value: value.into(),
        }
    }
}

impl CommandSpec for SetRange {
    fn name(&self) -> &'static str {
        "setrange"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            fmt_uint(self.offset),
            self.value.clone(),
        ])
    }
}
