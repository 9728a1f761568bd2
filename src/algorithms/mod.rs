//! Concrete algorithm recipes built on top of [`crate::pregel::Pregel`].
//!
//! Each recipe is a thin, opinionated wrapper: it assembles vertex columns,
//! message declarations and an aggregator, then delegates to `Pregel::run`.
//! None of these add backend capability; they demonstrate the driver.

pub mod connected_components;
pub mod degrees;
pub mod jaccard;
pub mod label_propagation;
pub mod page_rank;
pub mod shortest_paths;

pub use connected_components::connected_components;
pub use degrees::{degrees, in_degrees, out_degrees};
pub use jaccard::jaccard_similarity;
pub use label_propagation::label_propagation;
pub use page_rank::page_rank;
pub use shortest_paths::shortest_paths;
