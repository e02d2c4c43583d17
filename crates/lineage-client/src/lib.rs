//! lineage-client: boundary de emisión hacia el backend de linaje.
//!
//! Expone una única operación (`emit`) sobre un transporte intercambiable.
//! La configuración (URL, endpoint, timeout) se lee del entorno; sin URL
//! configurada el cliente escribe los eventos en consola.

pub mod config;
pub mod error;
pub mod transport;

pub use config::{init_dotenv, ClientConfig};
pub use error::TransportError;
pub use transport::{ConsoleTransport, FailingTransport, HttpTransport, InMemoryTransport, Transport};

use lineage_core::RunEvent;

/// Cliente de linaje: un transporte detrás de la operación `emit`.
pub struct LineageClient {
    transport: Box<dyn Transport>,
}

impl LineageClient {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Construye el cliente según el entorno: HTTP si `OPENLINEAGE_URL`
    /// está definida, consola en caso contrario.
    pub fn from_env() -> Result<Self, TransportError> {
        match ClientConfig::from_env() {
            Some(cfg) => Ok(Self::new(Box::new(HttpTransport::new(&cfg)?))),
            None => Ok(Self::new(Box::new(ConsoleTransport))),
        }
    }

    /// Emite un evento (bloqueante, sin reintentos).
    pub fn emit(&self, event: &RunEvent) -> Result<(), TransportError> {
        self.transport.emit(event)
    }
}
