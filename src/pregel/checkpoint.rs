//! Checkpoint manager (`spec.md` §4.6): wraps the backend's
//! materialize-and-cache primitive so plan depth does not grow unboundedly
//! across supersteps.

use polars::prelude::*;

use crate::errors::PregelResult;

/// Forces evaluation of `lf` and returns a fresh lazy plan over the
/// resulting [`DataFrame`]. Further references to the result do not
/// re-execute `lf`'s construction plan — Polars has no standalone
/// "cache a lazy plan" primitive, so collect-then-relazy is the idiomatic
/// stand-in for Ibis's `Table.cache()`.
pub fn materialize(lf: LazyFrame) -> PregelResult<LazyFrame> {
    Ok(lf.collect()?.lazy())
}
