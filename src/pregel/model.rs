use polars::prelude::Expr;

/// A declared state column: present in every `State(t)` and in the final
/// output. `initial_expr` is evaluated against the vertex row at `t=0`;
/// `update_expr` is evaluated against `State(t) ⟕ AggregatedMessages(t)` at
/// each later superstep and may reference [`crate::expr::msg`].
#[derive(Clone)]
pub struct VertexColumn {
    pub name: String,
    pub initial_expr: Expr,
    pub update_expr: Expr,
}

impl VertexColumn {
    pub fn new(name: impl Into<String>, initial_expr: Expr, update_expr: Expr) -> Self {
        Self {
            name: name.into(),
            initial_expr,
            update_expr,
        }
    }
}

/// Which triplet endpoint a message declaration targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTarget {
    Src,
    Dst,
}

/// A message declaration: contributes zero-or-one message per triplet row.
/// `msg_expr` producing null means "no message on this edge this superstep".
#[derive(Clone)]
pub struct MessageDeclaration {
    pub target: MessageTarget,
    pub msg_expr: Expr,
}

impl MessageDeclaration {
    pub fn new(target: MessageTarget, msg_expr: Expr) -> Self {
        Self { target, msg_expr }
    }
}
