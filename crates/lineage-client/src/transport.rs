//! Transportes de emisión de eventos.
//!
//! Un `Transport` recibe un `RunEvent` ya construido y lo entrega al
//! backend de linaje. Llamada bloqueante, fire-and-forget: sin retry ni
//! backoff; el resultado sólo informa si la entrega falló.

use std::sync::{Arc, Mutex};

use lineage_core::RunEvent;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::TransportError;

pub trait Transport {
    /// Entrega un evento al backend (orden de llamada = orden de emisión).
    fn emit(&self, event: &RunEvent) -> Result<(), TransportError>;
}

/// POST bloqueante del evento JSON al endpoint configurado.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder().timeout(config.timeout)
                                                         .build()?;
        Ok(Self { client,
                  url: config.full_url(),
                  api_key: config.api_key.clone() })
    }
}

impl Transport for HttpTransport {
    fn emit(&self, event: &RunEvent) -> Result<(), TransportError> {
        let mut request = self.client.post(&self.url).json(event);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request.send()?.error_for_status()?;
        debug!(url = %self.url, "lineage event delivered");
        Ok(())
    }
}

/// Escribe cada evento como una línea JSON en stdout. Es el transporte por
/// defecto cuando no hay backend configurado.
#[derive(Debug, Default)]
pub struct ConsoleTransport;

impl Transport for ConsoleTransport {
    fn emit(&self, event: &RunEvent) -> Result<(), TransportError> {
        println!("{}", serde_json::to_string(event)?);
        Ok(())
    }
}

/// Transporte en memoria: acumula los eventos emitidos en orden de
/// llegada. Clonar comparte el mismo buffer, útil para inspeccionar en
/// tests lo que el tracker emitió.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    events: Arc<Mutex<Vec<RunEvent>>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia de los eventos acumulados hasta ahora.
    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().map(|guard| guard.clone()).unwrap_or_default()
    }
}

impl Transport for InMemoryTransport {
    fn emit(&self, event: &RunEvent) -> Result<(), TransportError> {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event.clone());
        }
        Ok(())
    }
}

/// Transporte que siempre falla. Sirve para ejercitar las rutas de error
/// de emisión sin levantar un backend.
#[derive(Debug, Default)]
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn emit(&self, _event: &RunEvent) -> Result<(), TransportError> {
        Err(TransportError::Config("transport configured to fail".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use lineage_core::{Job, Run, RunState};
    use uuid::Uuid;

    use super::*;

    fn sample_event(state: RunState) -> RunEvent {
        RunEvent::new(state, Job::new("flowlineage", "Flow"), Run::new(Uuid::new_v4()), "test")
    }

    #[test]
    fn in_memory_transport_records_in_order() {
        let transport = InMemoryTransport::new();
        let handle = transport.clone();
        transport.emit(&sample_event(RunState::Start)).expect("emit");
        transport.emit(&sample_event(RunState::Complete)).expect("emit");

        let events = handle.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, RunState::Start);
        assert_eq!(events[1].event_type, RunState::Complete);
    }

    #[test]
    fn failing_transport_reports_error() {
        let transport = FailingTransport;
        assert!(transport.emit(&sample_event(RunState::Start)).is_err());
    }
}
