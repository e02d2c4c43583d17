//! Errores del instrumentador, separados por política (ver diseño):
//! el fallo de negocio de un step es autoritativo y nunca se enmascara;
//! los fallos de emisión alrededor de un step fallido se registran y se
//! descartan; los fallos propios de la tarea SQL se propagan.

use lineage_client::TransportError;
use lineage_sql::SqlError;
use thiserror::Error;

/// Error de negocio devuelto por el cuerpo de un step.
pub type StepError = Box<dyn std::error::Error + Send + Sync>;

/// Fallos del tracker de ciclo de vida (emisión de START/COMPLETE fuera
/// de la ruta de fallo; en esa ruta los errores de emisión se descartan).
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("lineage event emission failed: {0}")]
    Emit(#[from] TransportError),
}

/// Resultado terminal de ejecutar un flow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("lineage tracker failure: {0}")]
    Tracker(#[from] TrackerError),
    /// El step falló; `source` es el error original del step, sin tocar.
    #[error("step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: StepError,
    },
}

/// Fallos de la tarea de linaje SQL. A diferencia del tracker, esta tarea
/// propaga sus propios errores tras registrarlos.
#[derive(Debug, Error)]
pub enum SqlTaskError {
    #[error("sql lineage parse failed: {0}")]
    Parse(#[from] SqlError),
    #[error("sql lineage emission failed: {0}")]
    Emit(#[from] TransportError),
}
