// src/core/commands/generic/renamenx.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Renames a key only if the target does not exist.
#[derive(Debug, Clone, Default)]
pub struct RenameNx {
    pub key: Bytes,
    pub new_key: Bytes,
}

impl RenameNx {
    pub fn new(key: impl Into<Bytes>, new_key: impl Into<Bytes>) -> Self {
        RenameNx {
            key: key.into(),
            new_key: new_key.into(),
        }
    }
}

impl CommandSpec for RenameNx {
    fn name(&self) -> &'static str {
        "renamenx"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.new_key.clone()])
    }
}
