//! lineage-sql: parseo de SQL para linaje.
//!
//! Dos servicios puros, sin efectos secundarios:
//! - [`normalize`]: parsea con un dialecto y re-rinde cada sentencia en su
//!   forma canónica.
//! - [`extract_tables`]: recupera las tablas de entrada/salida referidas
//!   por el script.

pub mod error;
pub mod normalize;
pub mod tables;

pub use error::SqlError;
pub use normalize::normalize;
pub use tables::{extract_tables, SqlLineage, TableReference};
