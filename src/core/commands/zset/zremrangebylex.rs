// src/core/commands/zset/zremrangebylex.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use crate::core::range::LexRange;
use bytes::Bytes;

/// Removes members within a lexicographical range, replying with the
/// number removed.
#[derive(Debug, Clone, Default)]
pub struct ZRemRangeByLex {
    pub key: Bytes,
    pub range: LexRange,
}

impl ZRemRangeByLex {
    pub fn values_within(key: impl Into<Bytes>, range: LexRange) -> Self {
        ZRemRangeByLex {
            key: key.into(),
            range,
        }
    }
}

impl CommandSpec for ZRemRangeByLex {
    fn name(&self) -> &'static str {
        "zremrangebylex"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![
            self.key.clone(),
            self.range.min_token(),
            self.range.max_token(),
        ])
    }
}
