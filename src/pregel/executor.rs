//! The Pregel driver: fluent configuration surface plus the superstep loop.
//!
//! One type plays both roles the teacher's `pregel::executor` module splits
//! across `Pregel`/`PregelBuilder` — this engine's computation is an
//! expression tree rather than a closure, so (as in `ibisgraph.pregel.Pregel`,
//! the source this module is grounded on) a single consuming, chainable
//! struct both collects configuration and runs it.

use log::info;
use polars::prelude::*;

use crate::config::PregelRunConfig;
use crate::errors::{ConfigError, PregelResult};
use crate::graph::Graph;
use crate::pregel::aggregator::AggFn;
use crate::pregel::checkpoint;
use crate::pregel::constants as pc;
use crate::pregel::model::{MessageDeclaration, MessageTarget, VertexColumn};
use crate::pregel::planner::{self, SuperstepOutcome};
use crate::pregel::termination::StopReason;

/// Fluent builder and runner for a Pregel computation over a [`Graph`].
///
/// Every setter takes `self` by value and returns `Self`, so setters chain
/// in any order; `run()` consumes the instance and returns the final
/// relation as a materialized [`DataFrame`].
pub struct Pregel {
    graph: Graph,
    vertex_cols: Vec<VertexColumn>,
    messages: Vec<MessageDeclaration>,
    agg_fn: Option<AggFn>,
    has_active_flag: bool,
    initial_active_flag: Expr,
    active_flag_upd_expr: Option<Expr>,
    filter_messages_from_non_active: bool,
    stop_if_all_unactive: bool,
    early_stopping: bool,
    max_iter: i64,
    checkpoint_interval: i64,
}

impl Pregel {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            vertex_cols: Vec::new(),
            messages: Vec::new(),
            agg_fn: None,
            has_active_flag: false,
            initial_active_flag: lit(true),
            active_flag_upd_expr: None,
            filter_messages_from_non_active: false,
            stop_if_all_unactive: false,
            early_stopping: true,
            max_iter: 10,
            checkpoint_interval: 1,
        }
    }

    /// Declares a state column; replaces any existing column of the same
    /// name.
    pub fn add_vertex_col(
        mut self,
        name: impl Into<String>,
        initial_expr: Expr,
        update_expr: Expr,
    ) -> Self {
        let name = name.into();
        self.vertex_cols.retain(|c| c.name != name);
        self.vertex_cols
            .push(VertexColumn::new(name, initial_expr, update_expr));
        self
    }

    /// No-op if `name` is not a declared column.
    pub fn remove_vertex_col(mut self, name: &str) -> Self {
        self.vertex_cols.retain(|c| c.name != name);
        self
    }

    pub fn add_message_to_dst(mut self, msg_expr: Expr) -> Self {
        self.messages
            .push(MessageDeclaration::new(MessageTarget::Dst, msg_expr));
        self
    }

    pub fn add_message_to_src(mut self, msg_expr: Expr) -> Self {
        self.messages
            .push(MessageDeclaration::new(MessageTarget::Src, msg_expr));
        self
    }

    pub fn set_agg_expression_func(mut self, agg_fn: AggFn) -> Self {
        self.agg_fn = Some(agg_fn);
        self
    }

    pub fn set_has_active_flag(mut self, value: bool) -> Self {
        self.has_active_flag = value;
        self
    }

    /// Implies `set_has_active_flag(true)`.
    pub fn set_initial_active_flag(mut self, expr: Expr) -> Self {
        self.has_active_flag = true;
        self.initial_active_flag = expr;
        self
    }

    pub fn set_active_flag_upd_col(mut self, expr: Expr) -> Self {
        self.active_flag_upd_expr = Some(expr);
        self
    }

    pub fn set_filter_messages_from_non_active(mut self, value: bool) -> Self {
        self.filter_messages_from_non_active = value;
        self
    }

    pub fn set_stop_if_all_unactive(mut self, value: bool) -> Self {
        self.stop_if_all_unactive = value;
        self
    }

    pub fn set_early_stopping(mut self, value: bool) -> Self {
        self.early_stopping = value;
        self
    }

    /// `max_iter` is validated at `run()`, not here, so setters stay
    /// infallible and chainable (the teacher's `*ConfigBuilder`s defer
    /// validation to `build()` the same way).
    pub fn set_max_iter(mut self, value: i64) -> Self {
        self.max_iter = value;
        self
    }

    pub fn set_checkpoint_interval(mut self, value: i64) -> Self {
        self.checkpoint_interval = value;
        self
    }

    /// Applies every knob in `config` at once, overriding whatever was set
    /// by the individual `set_*` calls so far.
    pub fn set_config(self, config: PregelRunConfig) -> Self {
        self.set_max_iter(config.max_iter)
            .set_checkpoint_interval(config.checkpoint_interval)
            .set_early_stopping(config.early_stopping)
            .set_stop_if_all_unactive(config.stop_if_all_unactive)
            .set_filter_messages_from_non_active(config.filter_messages_from_non_active)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.agg_fn.is_none() {
            return Err(ConfigError::MissingAggregator);
        }
        if self.messages.is_empty() {
            return Err(ConfigError::NoMessageDeclared);
        }
        if self.vertex_cols.is_empty() {
            return Err(ConfigError::NoVertexColumn);
        }
        if self.max_iter <= 0 {
            return Err(ConfigError::NonPositiveMaxIter(self.max_iter));
        }
        if self.checkpoint_interval < 0 {
            return Err(ConfigError::NegativeCheckpointInterval(
                self.checkpoint_interval,
            ));
        }
        Ok(())
    }

    fn build_initial_state(&self) -> PregelResult<LazyFrame> {
        let schema = self.graph.nodes().collect_schema()?;
        let mut cols: Vec<Expr> = schema.iter_names().map(|n| col(n.as_str())).collect();
        for vcol in &self.vertex_cols {
            cols.push(vcol.initial_expr.clone().alias(vcol.name.as_str()));
        }
        if self.has_active_flag {
            cols.push(self.initial_active_flag.clone().alias(pc::ACTIVE_FLAG));
        }
        Ok(self.graph.nodes().select(cols))
    }

    fn finalize(&self, state: LazyFrame) -> PregelResult<DataFrame> {
        let state = if self.has_active_flag {
            state.select([col("*").exclude([pc::ACTIVE_FLAG])])
        } else {
            state
        };
        Ok(state.collect()?)
    }

    /// Runs the superstep loop and returns the final vertex relation, with
    /// every original vertex column, every declared vertex column, and
    /// `_active_flag` dropped. Terminates after (i) `max_iter` supersteps,
    /// (ii) an early-stopping probe firing on zero new messages, or (iii) an
    /// all-inactive probe firing, per `spec.md` §4.5.
    pub fn run(self) -> PregelResult<DataFrame> {
        self.validate()?;
        let agg_fn = self
            .agg_fn
            .clone()
            .expect("validate() checked agg_fn is Some");

        // Open question (spec.md §9): empty vertex set terminates
        // immediately after superstep 0, before any triplet plan is built.
        if self.graph.num_nodes()? == 0 {
            let state = self.build_initial_state()?;
            return self.finalize(state);
        }

        let original_columns: Vec<String> = self
            .graph
            .nodes()
            .collect_schema()?
            .iter_names()
            .map(|n| n.to_string())
            .collect();

        let packed_edges = planner::pack_and_cache_edges(self.graph.edges())?;

        let mut state = self.build_initial_state()?;
        let mut iteration: i64 = 0;
        let mut stop_reason: Option<StopReason> = None;

        while iteration < self.max_iter {
            info!("Start iteration {iteration} of {}", self.max_iter);

            let outcome = planner::run_superstep(
                state.clone(),
                &original_columns,
                &packed_edges,
                &self.vertex_cols,
                &self.messages,
                &agg_fn,
                self.has_active_flag,
                self.active_flag_upd_expr.as_ref(),
                self.filter_messages_from_non_active,
                self.early_stopping,
            )?;
            iteration += 1;

            match outcome {
                SuperstepOutcome::NoMessages(unchanged) => {
                    info!("Pregel stopped on iteration {iteration}: no more messages.");
                    state = unchanged;
                    stop_reason = Some(StopReason::NoMessages);
                    break;
                }
                SuperstepOutcome::Continue(next_state) => {
                    state = if self.checkpoint_interval > 0
                        && iteration % self.checkpoint_interval == 0
                    {
                        checkpoint::materialize(next_state)?
                    } else {
                        next_state
                    };

                    if self.stop_if_all_unactive && self.has_active_flag {
                        let distinct = state
                            .clone()
                            .select([col(pc::ACTIVE_FLAG)])
                            .unique(None, UniqueKeepStrategy::Any)
                            .collect()?;
                        if distinct.height() == 1 {
                            let only_value = distinct
                                .column(pc::ACTIVE_FLAG)?
                                .bool()?
                                .get(0)
                                .unwrap_or(true);
                            if !only_value {
                                info!("Pregel stopped earlier: all nodes are non-active.");
                                stop_reason = Some(StopReason::AllInactive);
                                break;
                            }
                        }
                    }
                }
            }
        }

        if stop_reason.is_none() {
            info!("Pregel stopped: max-iterations reached.");
        }

        self.finalize(state)
    }
}
