//! Constantes de identidad del emisor.
//!
//! Estos valores forman parte del contrato observable: cambian el contenido
//! de los eventos emitidos (namespace del scheduler y campo `producer`), por
//! lo que deben mantenerse estables entre versiones del instrumentador.

/// Namespace fijo del scheduler para los jobs a nivel de flow. Los jobs a
/// nivel de step usan el nombre del flow como namespace.
pub const SCHEDULER_NAMESPACE: &str = "flowlineage";

/// Identificador `producer` de los eventos de ciclo de vida (START /
/// COMPLETE / FAIL) emitidos por el tracker.
pub const PRODUCER_LIFECYCLE: &str = "flowlineage-tracker";

/// Identificador `producer` de los eventos OTHER emitidos por la tarea de
/// linaje SQL. Distinto del anterior para poder separar ambas fuentes.
pub const PRODUCER_SQL: &str = "flowlineage-sql";

/// Nombre reservado del step que abre el flow: al ejecutarse se crea y
/// emite el run a nivel de flow.
pub const START_STEP: &str = "start";

/// Nombre reservado del step que cierra el flow: su COMPLETE dispara el
/// COMPLETE del flow si el run de flow existe.
pub const END_STEP: &str = "end";
