//! FlowLineage Rust Library
//!
//! Instrumentación de linaje para un runner de pipelines por steps:
//! - `tracker` emite eventos estandarizados START/COMPLETE/FAIL por step
//!   y por flow hacia un backend de linaje.
//! - `flow` ejecuta los steps e invoca los hooks del tracker.
//! - `sql` parsea SQL embebido para inferir datasets de entrada/salida y
//!   los emite correlacionados al run del step vigente.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod errors;
pub mod flow;
pub mod sql;
pub mod tracker;

pub use errors::{FlowError, SqlTaskError, StepError, TrackerError};
pub use flow::{Flow, FlowStep, FnStep, StepCtx, StepResult};
pub use sql::execute_sql;
pub use tracker::{FlowContext, LineageTracker, TrackedRun};
