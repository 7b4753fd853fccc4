// src/core/commands/generic/rename.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Renames a key, overwriting any existing target.
#[derive(Debug, Clone, Default)]
pub struct Rename {
    pub key: Bytes,
    pub new_key: Bytes,
}

impl Rename {
    pub fn new(key: impl Into<Bytes>, new_key: impl Into<Bytes>) -> Self {
        Rename {
            key: key.into(),
            new_key: new_key.into(),
        }
    }
}

impl CommandSpec for Rename {
    fn name(&self) -> &'static str {
        "rename"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone(), self.new_key.clone()])
    }
}
