//! Tracker de ciclo de vida y su contexto por instancia de flow.

mod context;
mod lifecycle;

pub use context::{FlowContext, TrackedRun};
pub use lifecycle::LineageTracker;
