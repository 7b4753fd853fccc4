// src/core/range.rs

//! Range boundary types and their wire encoding.
//!
//! Sorted-set range commands address their endpoints with small textual
//! tokens: a bare canonical number for an inclusive score bound, a `(`
//! prefix for an exclusive one, and the `-inf`/`+inf` literals for an
//! unbounded side. Lexicographical ranges use `[`/`(` prefixes with `-`/`+`
//! as their sentinels. Everything here is a pure formatter; the ordering of
//! the two ends is the server's business, and an inverted range simply
//! matches nothing.

use crate::core::errors::CitrineError;
use bytes::{BufMut, Bytes, BytesMut};

/// One end of a score range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreBound {
    Inclusive(f64),
    Exclusive(f64),
    NegInfinity,
    PosInfinity,
}

impl Default for ScoreBound {
    fn default() -> Self {
        ScoreBound::Inclusive(0.0)
    }
}

impl ScoreBound {
    /// Encodes the bound as the token the server expects.
    ///
    /// Infinite bounds always yield the bare `-inf`/`+inf` literals: the
    /// wire grammar has no exclusive form for them. A NaN bound is the one
    /// value the type system cannot rule out and fails here.
    pub fn to_token(&self) -> Result<Bytes, CitrineError> {
        match *self {
            ScoreBound::NegInfinity => Ok(Bytes::from_static(b"-inf")),
            ScoreBound::PosInfinity => Ok(Bytes::from_static(b"+inf")),
            ScoreBound::Inclusive(score) => render_score(score, false),
            ScoreBound::Exclusive(score) => render_score(score, true),
        }
    }
}

fn render_score(score: f64, exclusive: bool) -> Result<Bytes, CitrineError> {
    if score.is_nan() {
        return Err(CitrineError::InvalidScoreBound);
    }
    if score == f64::NEG_INFINITY {
        return Ok(Bytes::from_static(b"-inf"));
    }
    if score == f64::INFINITY {
        return Ok(Bytes::from_static(b"+inf"));
    }
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format(score);
    let mut token = BytesMut::with_capacity(text.len() + 1);
    if exclusive {
        token.put_u8(b'(');
    }
    token.put_slice(text.as_bytes());
    Ok(token.freeze())
}

/// A score interval, possibly open or half-open on either end.
///
/// The default range spans the whole set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub min: ScoreBound,
    pub max: ScoreBound,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl ScoreRange {
    pub fn new(min: ScoreBound, max: ScoreBound) -> Self {
        ScoreRange { min, max }
    }

    /// The full range: `-inf` through `+inf`.
    pub fn unbounded() -> Self {
        ScoreRange {
            min: ScoreBound::NegInfinity,
            max: ScoreBound::PosInfinity,
        }
    }

    /// Both ends inclusive.
    pub fn closed(min: f64, max: f64) -> Self {
        ScoreRange {
            min: ScoreBound::Inclusive(min),
            max: ScoreBound::Inclusive(max),
        }
    }

    /// Both ends exclusive.
    pub fn open(min: f64, max: f64) -> Self {
        ScoreRange {
            min: ScoreBound::Exclusive(min),
            max: ScoreBound::Exclusive(max),
        }
    }

    /// Token for the lower end.
    pub fn min_token(&self) -> Result<Bytes, CitrineError> {
        self.min.to_token()
    }

    /// Token for the upper end.
    pub fn max_token(&self) -> Result<Bytes, CitrineError> {
        self.max.to_token()
    }
}

/// One end of a lexicographical range.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexBound {
    Inclusive(Bytes),
    Exclusive(Bytes),
    #[default]
    Min,
    Max,
}

impl LexBound {
    pub fn inclusive(value: impl Into<Bytes>) -> Self {
        LexBound::Inclusive(value.into())
    }

    pub fn exclusive(value: impl Into<Bytes>) -> Self {
        LexBound::Exclusive(value.into())
    }

    /// Encodes the bound: `-`/`+` for the sentinels, `[value` for an
    /// inclusive bound, `(value` for an exclusive one. Lex bounds carry no
    /// numeric text and cannot fail.
    pub fn to_token(&self) -> Bytes {
        match self {
            LexBound::Min => Bytes::from_static(b"-"),
            LexBound::Max => Bytes::from_static(b"+"),
            LexBound::Inclusive(value) => prefixed(b'[', value),
            LexBound::Exclusive(value) => prefixed(b'(', value),
        }
    }
}

fn prefixed(marker: u8, value: &Bytes) -> Bytes {
    let mut token = BytesMut::with_capacity(value.len() + 1);
    token.put_u8(marker);
    token.put_slice(value);
    token.freeze()
}

/// A lexicographical interval. The default range spans the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct LexRange {
    pub min: LexBound,
    pub max: LexBound,
}

impl Default for LexRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl LexRange {
    pub fn new(min: LexBound, max: LexBound) -> Self {
        LexRange { min, max }
    }

    /// The full range: `-` through `+`.
    pub fn unbounded() -> Self {
        LexRange {
            min: LexBound::Min,
            max: LexBound::Max,
        }
    }

    pub fn min_token(&self) -> Bytes {
        self.min.to_token()
    }

    pub fn max_token(&self) -> Bytes {
        self.max.to_token()
    }
}

/// An index range, both ends inclusive. Negative indexes count from the
/// tail of the traversal, as the server defines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRange {
    pub start: i64,
    pub stop: i64,
}

impl Default for RankRange {
    fn default() -> Self {
        Self::all()
    }
}

impl RankRange {
    pub fn new(start: i64, stop: i64) -> Self {
        RankRange { start, stop }
    }

    /// `0..=-1`, the whole set.
    pub fn all() -> Self {
        RankRange { start: 0, stop: -1 }
    }

    pub fn start_token(&self) -> Bytes {
        self.start.to_string().into()
    }

    pub fn stop_token(&self) -> Bytes {
        self.stop.to_string().into()
    }
}
