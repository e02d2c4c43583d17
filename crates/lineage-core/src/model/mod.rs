//! Modelo de datos: jobs, runs, datasets y facets.

mod dataset;
mod facet;
mod job;
mod run;

pub use dataset::Dataset;
pub use facet::{Facet, ParentJobRef, ParentRunFacet, ParentRunRef, SchemaFacet, SchemaField, SqlFacet};
pub use job::Job;
pub use run::Run;
