use polars::prelude::*;

use crate::errors::{PregelResult, SchemaError};

use super::constants;

/// A graph as a pair of relations: `nodes` keyed by `id_`, and `edges` with
/// `src_`/`dst_` (and optionally `weight_`).
///
/// Holding a `Graph` does not imply any open backend resource beyond the
/// `LazyFrame`s it wraps — both are lazy plans, not materialized tables.
#[derive(Clone)]
pub struct Graph {
    nodes: LazyFrame,
    edges: LazyFrame,
    directed: bool,
    is_weighted: bool,
}

fn require_column(schema: &Schema, name: &str) -> Result<DataType, SchemaError> {
    schema
        .get(name)
        .cloned()
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
}

fn require_integer_column(schema: &Schema, name: &str) -> Result<(), SchemaError> {
    let dtype = require_column(schema, name)?;
    if !dtype.is_integer() {
        return Err(SchemaError::NotInteger {
            column: name.to_string(),
            actual: format!("{dtype:?}"),
        });
    }
    Ok(())
}

impl Graph {
    /// Construct a graph, validating and renaming the nominated columns to
    /// the canonical names in [`constants`].
    ///
    /// Fails with [`SchemaError`] if `id_col`/`src_col`/`dst_col` do not exist
    /// or are not integer-typed, or if `weight_col` is nominated but absent.
    /// This is the stricter of the two graph-wrapper variants seen in the
    /// teacher lineage; per `spec.md` §9 it is the authoritative one.
    pub fn new(
        nodes: LazyFrame,
        edges: LazyFrame,
        directed: bool,
        id_col: &str,
        src_col: &str,
        dst_col: &str,
        weight_col: Option<&str>,
    ) -> Result<Self, SchemaError> {
        let node_schema = nodes
            .clone()
            .collect_schema()
            .map_err(|e| SchemaError::MissingColumn(format!("<node schema error: {e}>")))?;
        require_integer_column(&node_schema, id_col)?;

        let edge_schema = edges
            .clone()
            .collect_schema()
            .map_err(|e| SchemaError::MissingColumn(format!("<edge schema error: {e}>")))?;
        require_integer_column(&edge_schema, src_col)?;
        require_integer_column(&edge_schema, dst_col)?;
        if let Some(weight_col) = weight_col {
            require_column(&edge_schema, weight_col)?;
        }

        let nodes = nodes.rename([id_col], [constants::ID], true);
        let mut edges = edges.rename([src_col, dst_col], [constants::SRC, constants::DST], true);
        let is_weighted = if let Some(weight_col) = weight_col {
            edges = edges.rename([weight_col], [constants::WEIGHT], true);
            true
        } else {
            false
        };

        Ok(Self {
            nodes,
            edges,
            directed,
            is_weighted,
        })
    }

    /// The vertex relation, renamed to canonical columns.
    pub fn nodes(&self) -> LazyFrame {
        self.nodes.clone()
    }

    /// The edge relation, renamed to canonical columns.
    pub fn edges(&self) -> LazyFrame {
        self.edges.clone()
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.is_weighted
    }

    /// Builder-style: returns a graph with `directed` overridden.
    ///
    /// Undirected algorithms that rely on both-direction messaging (see
    /// `spec.md` §4.3) assume the edge relation holds each undirected edge
    /// once; if both directions are already materialized, setting
    /// `directed(true)` avoids double-counting instead.
    pub fn set_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Row count of `nodes`, materialized via the backend.
    pub fn num_nodes(&self) -> PregelResult<usize> {
        scalar_row_count(self.nodes.clone())
    }

    /// Row count of `edges`, materialized via the backend.
    pub fn num_edges(&self) -> PregelResult<usize> {
        scalar_row_count(self.edges.clone())
    }
}

fn scalar_row_count(lf: LazyFrame) -> PregelResult<usize> {
    let df = lf.select([len().alias("n")]).collect()?;
    let n = df.column("n")?.get(0)?.extract::<usize>().unwrap_or(0);
    Ok(n)
}
