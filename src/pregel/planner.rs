//! Superstep planner (`spec.md` §4.4): builds one lazy relational plan per
//! superstep — triplet join, message evaluation, aggregation, state rebuild.

use polars::prelude::*;

use crate::errors::PregelResult;
use crate::graph::constants as gc;
use crate::pregel::aggregator::AggFn;
use crate::pregel::constants as pc;
use crate::pregel::model::{MessageDeclaration, MessageTarget, VertexColumn};

/// Outcome of one superstep.
pub enum SuperstepOutcome {
    /// `State(t+1)`, ready for the caller to optionally checkpoint.
    Continue(LazyFrame),
    /// Step F fired: zero non-null messages were generated. Carries
    /// `State(t)` unchanged, per `spec.md` §4.4 step F.
    NoMessages(LazyFrame),
}

/// Packs every column of `lf` into a single struct column named `alias`,
/// the way `spec.md` §4.4 step A packs `State(t)` into `src_`/`dst_` rows so
/// the planner can reference `src_.id_` etc. independent of user column
/// names.
fn pack_into_struct(lf: LazyFrame, alias: &str) -> PregelResult<LazyFrame> {
    let schema = lf.clone().collect_schema()?;
    let cols: Vec<Expr> = schema.iter_names().map(|n| col(n.as_str())).collect();
    Ok(lf.select([as_struct(cols).alias(alias)]))
}

/// Packs `graph_edges` into a single cached struct column named `edge_`.
/// Built once before the superstep loop and collected-then-relazied so it
/// is not rebuilt from scratch on every join (mirrors `edges.cache()` in
/// `ibisgraph.pregel.pregel.Pregel.run`).
pub fn pack_and_cache_edges(edges: LazyFrame) -> PregelResult<LazyFrame> {
    let packed = pack_into_struct(edges, gc::EDGE)?;
    Ok(packed.collect()?.lazy())
}

/// Runs steps A-I of one superstep. Steps J (checkpoint) and K (all-inactive
/// probe) are the caller's responsibility since both need iteration-count
/// bookkeeping that lives in the executor, not the planner.
#[allow(clippy::too_many_arguments)]
pub fn run_superstep(
    state: LazyFrame,
    original_columns: &[String],
    packed_edges: &LazyFrame,
    vertex_cols: &[VertexColumn],
    messages: &[MessageDeclaration],
    agg_fn: &AggFn,
    has_active_flag: bool,
    active_flag_upd_expr: Option<&Expr>,
    filter_messages_from_non_active: bool,
    early_stopping: bool,
) -> PregelResult<SuperstepOutcome> {
    // Step A: pack endpoints.
    let src_packed = pack_into_struct(state.clone(), gc::SRC)?;
    let dst_packed = pack_into_struct(state.clone(), gc::DST)?;

    // Step B: form triplets.
    let mut triplets = src_packed
        .join(
            packed_edges.clone(),
            [col(gc::SRC).struct_().field_by_name(gc::ID)],
            [col(gc::EDGE).struct_().field_by_name(gc::SRC)],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            dst_packed,
            [col(gc::EDGE).struct_().field_by_name(gc::DST)],
            [col(gc::DST).struct_().field_by_name(gc::ID)],
            JoinArgs::new(JoinType::Inner),
        );

    // Step C: optional active filter.
    if filter_messages_from_non_active {
        let src_active = col(gc::SRC)
            .struct_()
            .field_by_name(pc::ACTIVE_FLAG)
            .cast(DataType::Boolean);
        let dst_active = col(gc::DST)
            .struct_()
            .field_by_name(pc::ACTIVE_FLAG)
            .cast(DataType::Boolean);
        triplets = triplets.filter(src_active.or(dst_active));
    }

    // Step D: evaluate messages. Each declaration becomes a
    // `{id_, msg}` struct; concat_list + explode plays the role of
    // `ibis.array(messages).unnest()` — one array-of-structs column built
    // from all declarations, then flattened to one row per (triplet x
    // declaration) without emitting one plan branch per declaration.
    let msg_structs: Vec<Expr> = messages
        .iter()
        .map(|m| {
            let target_id = match m.target {
                MessageTarget::Src => col(gc::SRC).struct_().field_by_name(gc::ID),
                MessageTarget::Dst => col(gc::DST).struct_().field_by_name(gc::ID),
            };
            as_struct(vec![
                target_id.alias(gc::ID),
                m.msg_expr.clone().alias("msg"),
            ])
        })
        .collect();

    let messages_lf = triplets
        .select([concat_list(msg_structs)?.alias("_messages")])
        .explode([col("_messages")])
        .unnest(["_messages"]);

    // Step E: filter null messages.
    let messages_lf = messages_lf.filter(col("msg").is_not_null());

    // Step F: early-stopping probe.
    if early_stopping {
        let counted = messages_lf.clone().select([len().alias("n")]).collect()?;
        let n: usize = counted
            .column("n")?
            .get(0)?
            .extract::<usize>()
            .unwrap_or(0);
        log::info!("{n} non-null messages were generated.");
        if n == 0 {
            return Ok(SuperstepOutcome::NoMessages(state));
        }
    }

    // Step G: aggregate.
    let aggregated = messages_lf
        .group_by([col(gc::ID)])
        .agg([agg_fn(col("msg")).alias(pc::PREGEL_MSG)]);

    // Step H: rebuild state (left join, so every vertex keeps a row even
    // with no aggregated message).
    let joined = state.join(
        aggregated,
        [col(gc::ID)],
        [col(gc::ID)],
        JoinArgs::new(JoinType::Left),
    );

    // Step I: apply updates.
    let mut new_columns: Vec<Expr> = original_columns.iter().map(|c| col(c.as_str())).collect();
    for vcol in vertex_cols {
        new_columns.push(vcol.update_expr.clone().alias(vcol.name.as_str()));
    }
    if has_active_flag {
        let active_expr = match active_flag_upd_expr {
            Some(expr) => expr.clone(),
            None => col(pc::PREGEL_MSG).is_not_null(),
        };
        new_columns.push(active_expr.alias(pc::ACTIVE_FLAG));
    }

    Ok(SuperstepOutcome::Continue(joined.select(new_columns)))
}
