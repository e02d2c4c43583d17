use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Facet;

/// Una ejecución concreta de un [`Job`](super::Job).
///
/// El `run_id`, una vez generado, es estable a lo largo de todos los
/// eventos que referencien este run. Los facets se adjuntan antes de
/// emitir el evento correspondiente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub run_id: Uuid,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facets: BTreeMap<String, Facet>,
}

impl Run {
    pub fn new(run_id: Uuid) -> Self {
        Self { run_id,
               facets: BTreeMap::new() }
    }

    /// Adjunta (o reemplaza) un facet bajo `key`.
    pub fn with_facet(mut self, key: impl Into<String>, facet: Facet) -> Self {
        self.facets.insert(key.into(), facet);
        self
    }
}
