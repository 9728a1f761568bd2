//! Reserved column names the planner owns; never user-settable.

/// Per-vertex aggregated message value for the current superstep.
pub const PREGEL_MSG: &str = "_pregel_msg";
/// Per-vertex active flag (present only when `has_active_flag` is enabled).
pub const ACTIVE_FLAG: &str = "_active_flag";
