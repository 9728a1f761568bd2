use thiserror::Error;

/// Construction-time failure: a nominated id/src/dst/weight column is
/// missing or has the wrong dtype.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("column '{0}' not found in relation")]
    MissingColumn(String),
    #[error("column '{column}' expected an integer dtype but has {actual}")]
    NotInteger { column: String, actual: String },
}

/// `run()`-time misconfiguration of a `Pregel` instance.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("an aggregator must be set via set_agg_expression_func before run()")]
    MissingAggregator,
    #[error("at least one message declaration (add_message_to_src/dst) is required")]
    NoMessageDeclared,
    #[error("at least one vertex column (add_vertex_col) is required")]
    NoVertexColumn,
    #[error("max_iter must be positive, got {0}")]
    NonPositiveMaxIter(i64),
    #[error("checkpoint_interval must be non-negative, got {0}")]
    NegativeCheckpointInterval(i64),
    #[error("expected 0 < alpha < 1.0, got {0}")]
    InvalidDampingFactor(f64),
}

/// Any failure surfaced by the relational backend during materialization,
/// propagated unchanged to the caller.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PregelError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<polars::prelude::PolarsError> for PregelError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        PregelError::Backend(BackendError::Polars(err))
    }
}

pub type PregelResult<T> = Result<T, PregelError>;

// Note: do not implement a blanket From<PregelError> to Box<dyn Error> — the
// standard library already provides a conflicting implementation for all
// StdError types. Leave conversions explicit where needed.
