//! PageRank, grounded in `original_source/ibisgraph/centrality/page_rank.py`.
//!
//! Rank mass flows from a vertex to its neighbors in proportion to
//! `pagerank / degree`; a vertex's error (`|old - new|`) drives the active
//! flag, so the run can stop early once every vertex has converged below
//! `tol`. The undirected variant assumes each undirected edge appears once
//! in `Edges` (documented on [`Graph::set_directed`]) and messages flow both
//! ways across that single row.

use polars::prelude::*;

use crate::algorithms::degrees::{degrees, out_degrees};
use crate::errors::{ConfigError, PregelResult};
use crate::expr;
use crate::graph::{constants as gc, Graph};
use crate::pregel::{aggregator, Pregel};

/// Runs PageRank to convergence (or `max_iters`, whichever comes first) and
/// returns `{id_, pagerank}`.
///
/// `alpha` is the damping factor and must be in `(0, 1)`; `tol` is the
/// per-vertex convergence threshold checked against the absolute rank delta.
pub fn page_rank(
    graph: &Graph,
    alpha: f64,
    max_iters: i64,
    checkpoint_interval: i64,
    tol: f64,
) -> PregelResult<DataFrame> {
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(ConfigError::InvalidDampingFactor(alpha).into());
    }

    let num_nodes = graph.num_nodes()? as f64;
    let coeff = (1.0 - alpha) / num_nodes;
    let initial_score = 1.0 / num_nodes;

    let degree_relation = if graph.directed() {
        out_degrees(graph)
    } else {
        degrees(graph)?
    };
    let nodes_with_degree = graph.nodes().join(
        degree_relation,
        [col(gc::ID)],
        [col(gc::ID)],
        JoinArgs::new(JoinType::Inner),
    );
    let degree_graph = Graph::new(
        nodes_with_degree,
        graph.edges(),
        graph.directed(),
        gc::ID,
        gc::SRC,
        gc::DST,
        None,
    )?;

    let rank_upd_expr = when(expr::msg().is_null())
        .then(lit(0.0))
        .otherwise(expr::msg())
        * lit(alpha)
        + lit(coeff);
    let err_upd_expr = (col("pagerank") - rank_upd_expr.clone()).abs();

    let mut pregel = Pregel::new(degree_graph)
        .add_vertex_col("pagerank", lit(initial_score), rank_upd_expr)
        .add_vertex_col("err", lit(100.0), err_upd_expr)
        .add_message_to_dst(expr::src("pagerank") / expr::src("degree"))
        .set_agg_expression_func(aggregator::sum())
        .set_initial_active_flag(lit(true))
        .set_active_flag_upd_col(col("err").gt_eq(lit(tol)))
        .set_early_stopping(true)
        .set_max_iter(max_iters)
        .set_checkpoint_interval(checkpoint_interval)
        .set_stop_if_all_unactive(true);

    if !graph.directed() {
        pregel = pregel.add_message_to_src(expr::dst("pagerank") / expr::dst("degree"));
    }

    let result = pregel.run()?;
    Ok(result
        .lazy()
        .select([col(gc::ID), col("pagerank")])
        .collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_directed_graph() -> Graph {
        let nodes = df! { "id" => [0i64, 1, 2, 3, 4] }.unwrap().lazy();
        let edges = df! {
            "src" => [0i64, 1, 2, 2, 3, 4, 4],
            "dst" => [1i64, 2, 4, 0, 4, 0, 2],
        }
        .unwrap()
        .lazy();
        Graph::new(nodes, edges, true, "id", "src", "dst", None).unwrap()
    }

    #[test]
    fn ranks_sum_to_one_on_a_directed_graph() {
        let g = simple_directed_graph();
        let result = page_rank(&g, 0.85, 5, 1, 1e-4).unwrap();
        let sum: f64 = result
            .column("pagerank")
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .sum();
        assert!((sum - 1.0).abs() < 1e-3);
    }

    #[test]
    fn rejects_damping_factor_out_of_range() {
        let g = simple_directed_graph();
        assert!(page_rank(&g, 1.0, 5, 1, 1e-4).is_err());
        assert!(page_rank(&g, 0.0, 5, 1, 1e-4).is_err());
    }
}
