// src/core/commands/zset/zrem.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Removes members from a sorted set, replying with the number removed.
#[derive(Debug, Clone, Default)]
pub struct ZRem {
    pub key: Bytes,
    pub members: Vec<Bytes>,
}

impl ZRem {
    pub fn single(key: impl Into<Bytes>, member: impl Into<Bytes>) -> Self {
        ZRem {
            key: key.into(),
            members: vec![member.into()],
        }
    }

    pub fn new(key: impl Into<Bytes>, members: Vec<Bytes>) -> Self {
        ZRem {
            key: key.into(),
            members,
        }
    }
}

impl CommandSpec for ZRem {
    fn name(&self) -> &'static str {
        "zrem"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        if self.members.is_empty() {
            return Err(CitrineError::WrongArgumentCount("ZREM".to_string()));
        }
        let mut args = vec![self.key.clone()];
        args.extend_from_slice(&self.members);
        Ok(args)
    }
}
