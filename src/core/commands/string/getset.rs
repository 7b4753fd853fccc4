// src/core/commands/string/getset.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Stores a value and replies with the one it replaced.
#[derive(Debug, Clone, Default)]
pub struct GetSet {
    pub key: Bytes,
    pub value: Bytes,
}

impl GetSet {
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        GetSet {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl CommandSpec for GetSet {
    fn name(&self) -> &'static str {
        "getset"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.value.clone()])
    }
}
