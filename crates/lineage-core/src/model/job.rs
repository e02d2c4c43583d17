use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Facet;

/// Identidad lógica de una unidad de trabajo (flow o step).
///
/// Invariante: `(namespace, name)` es inmutable una vez creado; sólo los
/// facets pueden crecer antes de emitir un evento que lo referencie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub namespace: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facets: BTreeMap<String, Facet>,
}

impl Job {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { namespace: namespace.into(),
               name: name.into(),
               facets: BTreeMap::new() }
    }
}
