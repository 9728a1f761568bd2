//! Ambient configuration layer, following the teacher's
//! `config::pregel_config` builder/validate convention.

mod pregel_run_config;

pub use pregel_run_config::{PregelRunConfig, PregelRunConfigBuilder};
