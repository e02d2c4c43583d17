//! Tipos de evento de run y estructura `RunEvent`.
//!
//! Rol en el flujo:
//! - El tracker de ciclo de vida emite un `RunEvent` por cada transición
//!   observada de un run (START al entrar, COMPLETE/FAIL al salir).
//! - La tarea de linaje SQL emite eventos OTHER correlacionados al run del
//!   step vigente por su `run_id`.
//! - La serialización serde reproduce exactamente la forma del esquema
//!   estándar de linaje (`eventType`, `eventTime`, `inputs`, `outputs`).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Dataset, Job, Run};

/// Estados observables de un run. El wire usa los nombres en mayúsculas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunState {
    Start,
    Complete,
    Fail,
    Other,
}

/// Emisión inmutable que describe una transición de estado de un `Run`
/// en un `Job`, con sus datasets de entrada/salida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunEvent {
    pub event_type: RunState,
    pub event_time: DateTime<Utc>,
    pub run: Run,
    pub job: Job,
    pub producer: String,
    #[serde(default)]
    pub inputs: Vec<Dataset>,
    #[serde(default)]
    pub outputs: Vec<Dataset>,
}

impl RunEvent {
    /// Construye un evento fechado en este instante, sin datasets.
    pub fn new(event_type: RunState, job: Job, run: Run, producer: &str) -> Self {
        Self { event_type,
               event_time: Utc::now(),
               run,
               job,
               producer: producer.to_string(),
               inputs: Vec::new(),
               outputs: Vec::new() }
    }

    /// Asigna las listas de datasets consumidos y producidos.
    pub fn with_io(mut self, inputs: Vec<Dataset>, outputs: Vec<Dataset>) -> Self {
        self.inputs = inputs;
        self.outputs = outputs;
        self
    }
}
