// src/core/commands/string/set.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_uint;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Defines the condition for `SET` execution (`NX` or `XX`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SetCondition {
    #[default]
    None, // Always set.
    IfExists,    // `XX` - only set if the key already exists.
    IfNotExists, // `NX` - only set if the key does not already exist.
}

/// Defines the TTL options for the `SET` command and its variants.
#[derive(Debug, Clone, Copy, Default)]
pub enum TtlOption {
    #[default]
    None, // No TTL option; the server clears any existing TTL.
    Seconds(u64),
    Milliseconds(u64),
    UnixSeconds(u64),
    UnixMilliseconds(u64),
    KeepExisting, // KEEPTTL flag.
}

/// Represents the full `SET` command with all its options.
#[derive(Debug, Clone, Default)]
pub struct Set {
    pub key: Bytes,
    pub value: Bytes,
    pub ttl: TtlOption,
    pub condition: SetCondition,
    pub get: bool, // `GET` option to return the old value.
}

impl Set {
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Set {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Only set if the key does not already exist (`NX`).
    pub fn if_not_exists(mut self) -> Self {
        self.condition = SetCondition::IfNotExists;
        self
    }

    /// Only set if the key already exists (`XX`).
    pub fn if_exists(mut self) -> Self {
        self.condition = SetCondition::IfExists;
        self
    }

    pub fn expire_seconds(mut self, seconds: u64) -> Self {
        self.ttl = TtlOption::Seconds(seconds);
        self
    }

    pub fn expire_milliseconds(mut self, millis: u64) -> Self {
        self.ttl = TtlOption::Milliseconds(millis);
        self
    }

    pub fn expire_at_seconds(mut self, unix_seconds: u64) -> Self {
        self.ttl = TtlOption::UnixSeconds(unix_seconds);
        self
    }

    pub fn expire_at_milliseconds(mut self, unix_millis: u64) -> Self {
        self.ttl = TtlOption::UnixMilliseconds(unix_millis);
        self
    }

    /// Keep whatever TTL the key already carries (`KEEPTTL`).
    pub fn keep_ttl(mut self) -> Self {
        self.ttl = TtlOption::KeepExisting;
        self
    }

    /// Ask the server to reply with the previous value (`GET`).
    pub fn return_old(mut self) -> Self {
        self.get = true;
        self
    }
}

impl CommandSpec for Set {
    fn name(&self) -> &'static str {
        "set"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        let mut args = vec![self.key.clone(), self.value.clone()];
        match self.ttl {
            TtlOption::None => {}
            TtlOption::Seconds(seconds) => {
                args.push("EX".into());
                args.push(fmt_uint(seconds));
            }
            TtlOption::Milliseconds(millis) => {
                args.push("PX".into());
                args.push(fmt_uint(millis));
            }
            TtlOption::UnixSeconds(ts) => {
                args.push("EXAT".into());
                args.push(fmt_uint(ts));
            }
            TtlOption::UnixMilliseconds(ts) => {
                args.push("PXAT".into());
                args.push(fmt_uint(ts));
            }
            TtlOption::KeepExisting => args.push("KEEPTTL".into()),
        }
        match self.condition {
            SetCondition::None => {}
            SetCondition::IfExists => args.push("XX".into()),
            SetCondition::IfNotExists => args.push("NX".into()),
        }
        if self.get {
            args.push("GET".into());
        }
        Ok(args)
    }
}
