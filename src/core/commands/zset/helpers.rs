// src/core/commands/zset/helpers.rs

//! Shared encoding for the set-combination commands.

use super::Aggregate;
use crate::core::commands::helpers::{fmt_int, fmt_score};
use crate::core::errors::CitrineError;
use bytes::Bytes;

/// Encodes `destination numkeys key... [WEIGHTS w...] [AGGREGATE agg]`.
///
/// An explicit weight list must match the key count. All-default weights
/// (every entry `1.0`) and `AGGREGATE SUM` are the server defaults and are
/// omitted from the wire form.
pub(super) fn store_args(
    command: &'static str,
    destination: &Bytes,
    keys: &[Bytes],
    weights: &[f64],
    aggregate: Aggregate,
) -> Result<Vec<Bytes>, CitrineError> {
    if keys.is_empty() {
        return Err(CitrineError::WrongArgumentCount(command.to_string()));
    }
    if !weights.is_empty() && weights.len() != keys.len() {
        return Err(CitrineError::InvalidRequest(format!(
            "WEIGHTS list of {} entries does not match {} source keys",
            weights.len(),
            keys.len()
        )));
    }

    let mut args = vec![destination.clone(), fmt_int(keys.len() as i64)];
    args.extend_from_slice(keys);

    let is_weights_default = weights.iter().all(|&w| (w - 1.0).abs() < f64::EPSILON);
    if !is_weights_default {
        args.push("WEIGHTS".into());
        args.extend(weights.iter().map(|&w| fmt_score(w)));
    }

    if aggregate != Aggregate::Sum {
        args.push("AGGREGATE".into());
        let agg = match aggregate {
            Aggregate::Sum => unreachable!(),
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        };
        args.push(agg.into());
    }
    Ok(args)
}
