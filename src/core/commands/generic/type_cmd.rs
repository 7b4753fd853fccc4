// src/core/commands/generic/type_cmd.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;
use std::str::FromStr;

/// The kind of value a key holds, as the server reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    None,
    String,
    List,
    Set,
    ZSet,
    Hash,
}

impl FromStr for KeyType {
    type Err = CitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(KeyType::None),
            "string" => Ok(KeyType::String),
            "list" => Ok(KeyType::List),
            "set" => Ok(KeyType::Set),
            "zset" => Ok(KeyType::ZSet),
            "hash" => Ok(KeyType::Hash),
            other => Err(CitrineError::UnexpectedReply(format!(
                "unknown key type '{other}'"
            ))),
        }
    }
}

/// Reports the kind of value stored at a key.
#[derive(Debug, Clone, Default)]
pub struct Type {
    pub key: Bytes,
}

impl Type {
    pub fn new(key: impl Into<Bytes>) -> Self {
        Type { key: key.into() }
    }
}

impl CommandSpec for Type {
    fn name(&self) -> &'static str {
        "type"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        Ok(vec![self.key.clone()])
    }
}
