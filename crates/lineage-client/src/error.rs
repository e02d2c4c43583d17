use thiserror::Error;

/// Fallos del boundary de emisión. La emisión es fire-and-forget: quien
/// llama decide si el error se propaga (tarea SQL) o se descarta con un
/// log (ruta de fallo del tracker).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("event serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("transport configuration error: {0}")]
    Config(String),
}
