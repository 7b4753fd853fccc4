// src/core/commands/helpers.rs

//! Shared token formatters for argument encoding.

use bytes::Bytes;

/// Canonical, locale-free text form of a score.
pub(crate) fn fmt_score(score: f64) -> Bytes {
    let mut buffer = ryu::Buffer::new();
    Bytes::copy_from_slice(buffer.format(score).as_bytes())
}

pub(crate) fn fmt_int(value: i64) -> Bytes {
    value.to_string().into()
}

pub(crate) fn fmt_uint(value: u64) -> Bytes {
    value.to_string().into()
}
