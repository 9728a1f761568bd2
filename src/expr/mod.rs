//! Named accessors into the current-row struct fields used inside
//! user-supplied message/update expressions.
//!
//! These return opaque [`polars::prelude::Expr`] trees the planner binds
//! during triplet/state plan construction; they must never be evaluated
//! eagerly, only composed into larger expressions.

use polars::prelude::*;

use crate::graph::constants as graph_constants;
use crate::pregel::constants as pregel_constants;

/// Attribute `field` of the source endpoint of the current triplet.
pub fn src(field: &str) -> Expr {
    col(graph_constants::SRC).struct_().field_by_name(field)
}

/// Attribute `field` of the destination endpoint of the current triplet.
pub fn dst(field: &str) -> Expr {
    col(graph_constants::DST).struct_().field_by_name(field)
}

/// Attribute `field` of the edge of the current triplet.
pub fn edge(field: &str) -> Expr {
    col(graph_constants::EDGE).struct_().field_by_name(field)
}

/// The aggregated message value on a vertex row; only meaningful inside an
/// update expression (`State(t) ⟕ AggregatedMessages(t)`).
pub fn msg() -> Expr {
    col(pregel_constants::PREGEL_MSG)
}
