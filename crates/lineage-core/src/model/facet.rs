//! Facets: metadatos estructurados con nombre, adjuntos a jobs, runs o
//! datasets. Se serializan exactamente con la forma del esquema estándar
//! de eventos de linaje (claves `runId`, `type`, etc.).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Facet soportado por el instrumentador. `untagged`: en el wire cada
/// variante aparece como su objeto JSON plano, sin discriminante.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Facet {
    Parent(ParentRunFacet),
    Sql(SqlFacet),
    Schema(SchemaFacet),
}

/// Enlace de un run de step con el run de flow que lo contiene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentRunFacet {
    pub run: ParentRunRef,
    pub job: ParentJobRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRunRef {
    pub run_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentJobRef {
    pub namespace: String,
    pub name: String,
}

impl ParentRunFacet {
    pub fn new(run_id: Uuid, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { run: ParentRunRef { run_id },
               job: ParentJobRef { namespace: namespace.into(),
                                   name: name.into() } }
    }
}

/// Texto SQL crudo asociado a un run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlFacet {
    pub query: String,
}

/// Esquema de un dataset: lista ordenada de `(nombre, tipo)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFacet {
    pub fields: Vec<SchemaField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self { name: name.into(),
               field_type: field_type.into() }
    }
}
