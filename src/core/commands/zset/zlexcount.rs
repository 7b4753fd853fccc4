// src/core/commands/zset/zlexcount.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use crate::core::range::LexRange;
use bytes::Bytes;

/// Counts members within a lexicographical range.
#[derive(Debug, Clone, Default)]
pub struct ZLexCount {
    pub key: Bytes,
    pub range: LexRange,
}

impl ZLexCount {
    pub fn values_within(key: impl Into<Bytes>, range: LexRange) -> Self {
        ZLexCount {
            key: key.into(),
            range,
        }
    }
}

impl CommandSpec for ZLexCount {
    fn name(&self) -> &'static str {
        "zlexcount"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            self.range.min_token(),
            self.range.max_token(),
        ])
    }
}
