use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Facet, SchemaFacet, SchemaField};

/// Referencia a un dataset consumido o producido por un run.
///
/// Identificado por `(namespace, name)`; opcionalmente lleva un facet
/// `schema` con la lista ordenada de campos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub namespace: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facets: BTreeMap<String, Facet>,
}

impl Dataset {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { namespace: namespace.into(),
               name: name.into(),
               facets: BTreeMap::new() }
    }

    /// Adjunta el facet `schema` con los campos dados (orden preservado).
    pub fn with_schema(mut self, fields: Vec<SchemaField>) -> Self {
        self.facets.insert("schema".to_string(), Facet::Schema(SchemaFacet { fields }));
        self
    }
}
