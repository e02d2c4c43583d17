//! Runner de flows y trait de steps.

mod runner;
mod step;

pub use runner::Flow;
pub use step::{FlowStep, FnStep, StepCtx, StepResult};
