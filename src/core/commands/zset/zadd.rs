// src/core/commands/zset/zadd.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::fmt_score;
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Defines the condition for `ZADD` execution (`NX` or `XX`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZaddCondition {
    #[default]
    None,
    IfNotExists, // NX
    IfExists,    // XX
}

/// Defines the update rule applied when a member already exists (`GT`/`LT`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZaddUpdateRule {
    #[default]
    None,
    LessThan,    // LT
    GreaterThan, // GT
}

/// Represents the full `ZADD` command with all its options.
#[derive(Debug, Clone, Default)]
pub struct ZAdd {
    pub key: Bytes,
    pub members: Vec<(f64, Bytes)>,
    pub condition: ZaddCondition,
    pub update_rule: ZaddUpdateRule,
    pub ch: bool,
    pub incr: bool,
}

impl ZAdd {
    pub fn single(key: impl Into<Bytes>, score: f64, member: impl Into<Bytes>) -> Self {
        ZAdd {
            key: key.into(),
            members: vec![(score, member.into())],
            ..Default::default()
        }
    }

    pub fn new(key: impl Into<Bytes>, members: Vec<(f64, Bytes)>) -> Self {
        ZAdd {
            key: key.into(),
            members,
            ..Default::default()
        }
    }

    /// Only add new members; never update existing ones (`NX`).
    pub fn if_not_exists(mut self) -> Self {
        self.condition = ZaddCondition::IfNotExists;
        self
    }

    /// Only update existing members; never add new ones (`XX`).
    pub fn if_exists(mut self) -> Self {
        self.condition = ZaddCondition::IfExists;
        self
    }

    /// Only update when the new score is greater (`GT`).
    pub fn greater_than(mut self) -> Self {
        self.update_rule = ZaddUpdateRule::GreaterThan;
        self
    }

    /// Only update when the new score is lower (`LT`).
    pub fn less_than(mut self) -> Self {
        self.update_rule = ZaddUpdateRule::LessThan;
        self
    }

    /// Reply with the count of changed members instead of added ones (`CH`).
    pub fn changed_count(mut self) -> Self {
        self.ch = true;
        self
    }

    /// Increment mode (`INCR`): a single member's score is incremented and
    /// the reply is the new score instead of a count.
    pub fn incr(mut self) -> Self {
        self.incr = true;
        self
    }
}

impl CommandSpec for ZAdd {
    fn name(&self) -> &'static str {
        "zadd"
    }
    fn to_args(&self) -> Result<Vec<Bytes>, CitrineError> {
        if self.members.is_empty() {
            return Err(CitrineError::WrongArgumentCount("ZADD".to_string()));
        }
        if self.condition != ZaddCondition::None && self.update_rule != ZaddUpdateRule::None {
            return Err(CitrineError::SyntaxError);
        }
        if self.incr
            && (self.condition != ZaddCondition::None || self.update_rule != ZaddUpdateRule::None)
        {
            return Err(CitrineError::SyntaxError);
        }
        if self.incr && self.members.len() != 1 {
            return Err(CitrineError::InvalidRequest(
                "INCR option supports a single increment-element pair".into(),
            ));
        }

        let mut args = vec![self.key.clone()];
        if self.condition == ZaddCondition::IfNotExists {
            args.push("NX".into());
        }
        if self.condition == ZaddCondition::IfExists {
            args.push("XX".into());
        }
        if self.update_rule == ZaddUpdateRule::GreaterThan {
            args.push("GT".into());
        }
        if self.update_rule == ZaddUpdateRule::LessThan {
            args.push("LT".into());
        }
        if self.ch {
            args.push("CH".into());
        }
        if self.incr {
            args.push("INCR".into());
        }
        args.extend(
            self.members
                .iter()
                .flat_map(|(score, member)| [fmt_score(*score), member.clone()]),
        );
        Ok(args)
    }
}
