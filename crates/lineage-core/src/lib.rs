//! lineage-core: modelo de datos OpenLineage (Job, Run, RunEvent, Dataset)
pub mod constants;
pub mod event;
pub mod model;

pub use event::{RunEvent, RunState};
pub use model::{Dataset, Facet, Job, ParentRunFacet, Run, SchemaFacet, SchemaField, SqlFacet};
