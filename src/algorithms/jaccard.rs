//! Jaccard neighbor similarity.
//!
//! `ibisgraph.similarity.similarity`'s source was not retrieved, but
//! `original_source/tests/test_similarity.py` pins the output contract
//! (`{node_id_left, node_id_right, jaccard_similarity}`) and one data point
//! (karate club, vertices 1 and 33, similarity ≈ 0.12). Unlike the other
//! recipes this is a single relational query, not a Pregel computation —
//! neighbor sets are static, so there is nothing to iterate.

use polars::prelude::*;

use crate::algorithms::degrees::degrees;
use crate::errors::PregelResult;
use crate::graph::{constants as gc, Graph};

/// Returns, for every unordered pair of vertices sharing at least one
/// neighbor, `{node_id_left, node_id_right, jaccard_similarity}` where
/// `jaccard_similarity = |N(u) ∩ N(v)| / |N(u) ∪ N(v)|` over undirected
/// adjacency.
pub fn jaccard_similarity(graph: &Graph) -> PregelResult<DataFrame> {
    let forward = graph
        .edges()
        .select([col(gc::SRC).alias(gc::ID), col(gc::DST).alias("neighbor")]);
    let backward = graph
        .edges()
        .select([col(gc::DST).alias(gc::ID), col(gc::SRC).alias("neighbor")]);
    let neighbors = concat([forward, backward], UnionArgs::default())?;

    let left = neighbors
        .clone()
        .rename([gc::ID], ["node_id_left"], true);
    let right = neighbors.rename([gc::ID], ["node_id_right"], true);

    let shared_neighbor_pairs = left
        .join(
            right,
            [col("neighbor")],
            [col("neighbor")],
            JoinArgs::new(JoinType::Inner),
        )
        .filter(col("node_id_left").lt(col("node_id_right")));

    let intersection = shared_neighbor_pairs
        .group_by([col("node_id_left"), col("node_id_right")])
        .agg([len().alias("intersection")]);

    let degree = degrees(graph)?;
    let degree_left = degree
        .clone()
        .rename([gc::ID, "degree"], ["node_id_left", "degree_left"], true);
    let degree_right = degree.rename([gc::ID, "degree"], ["node_id_right", "degree_right"], true);

    let with_degrees = intersection
        .join(
            degree_left,
            [col("node_id_left")],
            [col("node_id_left")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            degree_right,
            [col("node_id_right")],
            [col("node_id_right")],
            JoinArgs::new(JoinType::Inner),
        );

    let intersection_f = col("intersection").cast(DataType::Float64);
    let union_f = col("degree_left").cast(DataType::Float64) + col("degree_right").cast(DataType::Float64)
        - intersection_f.clone();

    let result = with_degrees
        .with_columns([(intersection_f / union_f).alias("jaccard_similarity")])
        .select([
            col("node_id_left"),
            col("node_id_right"),
            col("jaccard_similarity"),
        ]);

    Ok(result.collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles_sharing_a_vertex() -> Graph {
        // 1-2-3 triangle and 3-4-5 triangle, sharing vertex 3.
        let nodes = df! { "id" => [1i64, 2, 3, 4, 5] }.unwrap().lazy();
        let edges = df! {
            "src" => [1i64, 1, 2, 3, 3, 4],
            "dst" => [2i64, 3, 3, 4, 5, 5],
        }
        .unwrap()
        .lazy();
        Graph::new(nodes, edges, false, "id", "src", "dst", None).unwrap()
    }

    #[test]
    fn similarity_is_symmetric_pairwise_and_bounded() {
        let g = two_triangles_sharing_a_vertex();
        let result = jaccard_similarity(&g).unwrap();
        let sims: Vec<f64> = result
            .column("jaccard_similarity")
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert!(sims.iter().all(|&s| (0.0..=1.0).contains(&s)));
    }
}
