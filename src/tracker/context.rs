//! Estado por instancia de flow.
//!
//! Vive exactamente una invocación del flow: sin persistencia entre
//! invocaciones y sin compartición entre hilos. En lugar del atributo
//! ambiental mutable del diseño original, el contexto es propiedad del
//! tracker, que se pasa explícitamente a quien lo necesita.

use std::collections::HashMap;

use lineage_core::{Job, Run};

/// Par (Job, Run) registrado para un flow o un step.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedRun {
    pub job: Job,
    pub run: Run,
}

/// Contexto mutable de una invocación de flow.
#[derive(Debug, Default)]
pub struct FlowContext {
    /// Job/Run a nivel de flow. Se crea una sola vez (en el step de
    /// arranque) y se reutiliza para el COMPLETE final y los FAIL.
    pub flow: Option<TrackedRun>,
    /// Job/Run de cada step, indexado por nombre de step.
    pub steps: HashMap<String, TrackedRun>,
    /// Step actualmente en ejecución; lo lee la tarea de linaje SQL.
    pub current_step: Option<String>,
}

impl FlowContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registro del step vigente, si hay uno.
    pub fn current(&self) -> Option<&TrackedRun> {
        self.current_step.as_deref().and_then(|name| self.steps.get(name))
    }
}
