//! Multi-landmark shortest-path distances.
//!
//! `original_source/ibisgraph/traversal/shortest_paths.py` is a stub
//! (`def shortest_paths(...): ...`); `original_source/tests/test_shortest_paths.py`
//! pins the contract it would have had: a `distances` struct column with one
//! field per landmark, named `distance_to_<landmark>`. This completes it as
//! a genuine Pregel recipe: unweighted BFS flooding from every landmark at
//! once, carried as a single struct-valued message/vertex column so one
//! superstep advances every landmark's frontier together.
//!
//! A vertex's own message-null check does not apply here — the message
//! itself is a struct (never null at the top level, only per-field), so
//! this recipe runs a fixed `max_iters` supersteps instead of relying on
//! early stopping or the active-flag probes.

use polars::prelude::*;

use crate::errors::PregelResult;
use crate::expr;
use crate::graph::{constants as gc, Graph};
use crate::pregel::Pregel;

const DISTANCES_COL: &str = "distances";

fn field_name(landmark: i64) -> String {
    format!("distance_to_{landmark}")
}

/// Runs unweighted BFS from every landmark simultaneously and returns
/// `{id_, distances}`, where `distances` is a struct with one
/// `distance_to_<landmark>` field per entry in `landmarks`.
pub fn shortest_paths(graph: &Graph, landmarks: &[i64], max_iters: i64) -> PregelResult<DataFrame> {
    let names: Vec<String> = landmarks.iter().copied().map(field_name).collect();

    let initial_fields: Vec<Expr> = landmarks
        .iter()
        .zip(&names)
        .map(|(&landmark, name)| {
            when(col(gc::ID).eq(lit(landmark)))
                .then(lit(0i64))
                .otherwise(lit(NULL).cast(DataType::Int64))
                .alias(name.as_str())
        })
        .collect();
    let initial_expr = as_struct(initial_fields);

    let update_fields: Vec<Expr> = names
        .iter()
        .map(|name| {
            let old_field = col(DISTANCES_COL).struct_().field_by_name(name);
            let msg_field = expr::msg().struct_().field_by_name(name);
            when(old_field.clone().is_null())
                .then(msg_field.clone())
                .when(msg_field.clone().is_null())
                .then(old_field.clone())
                .otherwise(
                    when(msg_field.clone().lt(old_field.clone()))
                        .then(msg_field)
                        .otherwise(old_field),
                )
                .alias(name.as_str())
        })
        .collect();
    let update_expr = as_struct(update_fields);

    let msg_fields_from = |endpoint: fn(&str) -> Expr, names: &[String]| -> Expr {
        let fields: Vec<Expr> = names
            .iter()
            .map(|name| {
                (endpoint(DISTANCES_COL).struct_().field_by_name(name) + lit(1i64)).alias(name.as_str())
            })
            .collect();
        as_struct(fields)
    };

    let agg_names = names.clone();
    let agg_fn: crate::pregel::AggFn = std::sync::Arc::new(move |msg_expr: Expr| {
        let fields: Vec<Expr> = agg_names
            .iter()
            .map(|name| {
                msg_expr
                    .clone()
                    .struct_()
                    .field_by_name(name)
                    .min()
                    .alias(name.as_str())
            })
            .collect();
        as_struct(fields)
    });

    let mut pregel = Pregel::new(graph.clone())
        .add_vertex_col(DISTANCES_COL, initial_expr, update_expr)
        .add_message_to_dst(msg_fields_from(expr::src, &names))
        .set_agg_expression_func(agg_fn)
        .set_early_stopping(false)
        .set_max_iter(max_iters)
        .set_checkpoint_interval(1);

    if !graph.directed() {
        pregel = pregel.add_message_to_src(msg_fields_from(expr::dst, &names));
    }

    let result = pregel.run()?;
    Ok(result
        .lazy()
        .select([col(gc::ID), col(DISTANCES_COL)])
        .collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> Graph {
        let nodes = df! { "id" => [1i64, 2, 3, 4, 5] }.unwrap().lazy();
        let edges = df! {
            "src" => [1i64, 2, 3, 4],
            "dst" => [2i64, 3, 4, 5],
        }
        .unwrap()
        .lazy();
        Graph::new(nodes, edges, false, "id", "src", "dst", None).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let g = chain_graph();
        let result = shortest_paths(&g, &[1], 10).unwrap();
        let unnested = result
            .lazy()
            .sort([gc::ID], Default::default())
            .select([col(gc::ID), col(DISTANCES_COL).struct_().field_by_name("distance_to_1")])
            .collect()
            .unwrap();
        let distances: Vec<i64> = unnested
            .column("distance_to_1")
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(distances, vec![0, 1, 2, 3, 4]);
    }
}
