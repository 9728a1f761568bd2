//! Canonical column names the driver assumes everywhere.
//!
//! User relations may name their id/src/dst/weight columns anything;
//! [`super::Graph::new`] renames them to these fixed names on construction,
//! so the rest of the crate never has to carry user naming through a plan.

/// Vertex id column.
pub const ID: &str = "id_";
/// Edge source column.
pub const SRC: &str = "src_";
/// Edge destination column.
pub const DST: &str = "dst_";
/// Optional edge weight column.
pub const WEIGHT: &str = "weight_";
/// Name given to the struct built by packing an entire edge row.
pub const EDGE: &str = "edge_";
