// src/core/commands/string/getrange.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_int;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// A substring of the value between two byte offsets, both inclusive.
/// Negative offsets count from the end of the value.
#[derive(Debug, Clone, Default)]
pub struct GetRange {
    pub key: Bytes,
    pub start: i64,
    pub end: i64,
}

impl GetRange {
    pub fn new(key: impl Into<Bytes>, start: i64, end: i64) -> Self {
        GetRange {
            key: key.into(),
            start,
            end,
        }
    }
}

impl CommandSpec for GetRange {
    fn name(&self) -> &'static str {
        "getrange"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            fmt_int(self.start),
            fmt_int(self.end),
        ])
    }
}
