use std::sync::Arc;

use polars::prelude::Expr;

/// Maps the bag of aggregated-message values arriving at a destination
/// vertex into a single value. Associative (and in practice commutative);
/// ties are broken by the aggregator itself, per `spec.md` §4.4 step G.
///
/// Represented as an opaque function over [`Expr`] rather than a closure
/// evaluated eagerly in the driver, so the backend still sees one lazy plan
/// (`spec.md` §9 "Expressions as first-class values").
pub type AggFn = Arc<dyn Fn(Expr) -> Expr + Send + Sync>;

/// Sum of messages.
pub fn sum() -> AggFn {
    Arc::new(|msg: Expr| msg.sum())
}

/// Maximum message.
pub fn max() -> AggFn {
    Arc::new(|msg: Expr| msg.max())
}

/// Minimum message.
pub fn min() -> AggFn {
    Arc::new(|msg: Expr| msg.min())
}

/// An arbitrary single message (no ordering guarantee, per `spec.md` §5).
pub fn first() -> AggFn {
    Arc::new(|msg: Expr| msg.first())
}

/// Collects all messages into a list, e.g. for set-like accumulation.
pub fn collect_list() -> AggFn {
    Arc::new(|msg: Expr| msg.implode())
}

/// Count of non-null messages.
pub fn count() -> AggFn {
    Arc::new(|msg: Expr| msg.count())
}

/// The most frequent message value, ties broken by `.first()`. Used by
/// label-propagation-style recipes where the aggregate is "majority vote
/// among neighbors".
pub fn mode() -> AggFn {
    Arc::new(|msg: Expr| msg.mode().first())
}
