//! Carga de configuración del transporte desde variables de entorno.
//! Usa convención `OPENLINEAGE_URL` y parámetros opcionales de endpoint,
//! API key y timeout.

use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

const DEFAULT_ENDPOINT: &str = "api/v1/lineage";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Lee la configuración del entorno. `None` si `OPENLINEAGE_URL` no
    /// está definida (el cliente cae al transporte de consola).
    pub fn from_env() -> Option<Self> {
        Lazy::force(&DOTENV_LOADED);
        let url = env::var("OPENLINEAGE_URL").ok()?;
        let endpoint = env::var("OPENLINEAGE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let api_key = env::var("OPENLINEAGE_API_KEY").ok();
        let timeout_secs = env::var("OPENLINEAGE_TIMEOUT").ok()
                                                          .and_then(|v| v.parse().ok())
                                                          .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Some(Self { url,
                    endpoint,
                    api_key,
                    timeout: Duration::from_secs(timeout_secs) })
    }

    /// URL completa de emisión, sin separadores duplicados.
    pub fn full_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), self.endpoint.trim_start_matches('/'))
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
