//! Definición de eventos de run.

mod types;

pub use types::{RunEvent, RunState};
