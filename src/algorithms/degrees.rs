//! Degree centrality, computed directly from `Edges` by group-by-count.
//!
//! Re-derived from call sites (`page_rank`'s directed/undirected degree
//! join) and `original_source/tests/test_degrees.py` rather than a
//! retrieved `ibisgraph.centrality.degrees` source file — that file was not
//! part of the retrieval pack, but its contract (a `{node_id, degree}`
//! relation) is pinned down by those call sites and the karate-club
//! assertions (`node 1 has degree 16`).

use polars::prelude::*;

use crate::errors::PregelResult;
use crate::graph::{constants as gc, Graph};

/// Out-degree of every vertex that has at least one outgoing edge, as
/// `{id_, degree}`. Vertices with no outgoing edge are absent — callers
/// that need every vertex represented should left-join against `graph.nodes()`.
pub fn out_degrees(graph: &Graph) -> LazyFrame {
    graph
        .edges()
        .group_by([col(gc::SRC).alias(gc::ID)])
        .agg([len().alias("degree")])
}

/// In-degree of every vertex that has at least one incoming edge, as
/// `{id_, degree}`.
pub fn in_degrees(graph: &Graph) -> LazyFrame {
    graph
        .edges()
        .group_by([col(gc::DST).alias(gc::ID)])
        .agg([len().alias("degree")])
}

/// Total degree for an undirected graph: each edge row is assumed to record
/// an unordered pair once, so a vertex's degree is its out-degree plus its
/// in-degree under that single row. Matches `page_rank.py`'s
/// `degrees(graph)` call for the undirected branch.
pub fn degrees(graph: &Graph) -> PregelResult<LazyFrame> {
    let out = out_degrees(graph);
    let inn = in_degrees(graph);
    let combined = concat([out, inn], UnionArgs::default())?
        .group_by([col(gc::ID)])
        .agg([col("degree").sum()]);
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn karate_triangle() -> Graph {
        // node 1 linked to 2 and 3; node 2 linked to 3. Undirected degrees:
        // 1 -> 2, 2 -> 2, 3 -> 2.
        let nodes = df! { "id" => [1i64, 2, 3] }.unwrap().lazy();
        let edges = df! {
            "src" => [1i64, 1, 2],
            "dst" => [2i64, 3, 3],
        }
        .unwrap()
        .lazy();
        Graph::new(nodes, edges, false, "id", "src", "dst", None).unwrap()
    }

    #[test]
    fn total_degree_sums_both_endpoints() {
        let g = karate_triangle();
        let result = degrees(&g).unwrap().sort([gc::ID], Default::default());
        let df = result.collect().unwrap();
        let degree: Vec<u32> = df
            .column("degree")
            .unwrap()
            .u32()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(degree, vec![2, 2, 2]);
    }
}
