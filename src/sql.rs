//! Tarea de linaje SQL.
//!
//! Dada una consulta y un dialecto: normaliza las sentencias, extrae las
//! tablas de entrada/salida, adjunta el texto SQL como facet `sql` del run
//! del step vigente y emite un evento OTHER correlacionado a ese run.
//!
//! Política de errores: los fallos de parseo/emisión se registran y se
//! propagan. La ausencia de contexto (ningún step vigente) NO es un
//! error: la captura de linaje nunca debe abortar un step que no pasó por
//! el tracker; se registra un warning y se retorna sin emitir.

use lineage_core::constants::PRODUCER_SQL;
use lineage_core::{Dataset, Facet, RunEvent, RunState, SqlFacet};
use lineage_sql::TableReference;
use tracing::{error, warn};

use crate::errors::SqlTaskError;
use crate::tracker::LineageTracker;

/// Punto de entrada de la tarea. `dialect` es el identificador del
/// dialecto del parser (`snowflake`, `hive`, `postgres`, ...).
pub fn execute_sql(tracker: &mut LineageTracker, query: &str, dialect: &str) -> Result<(), SqlTaskError> {
    let outcome = run_task(tracker, query, dialect);
    if let Err(e) = &outcome {
        error!(dialect = %dialect, error = %e, "fallo en la tarea de linaje SQL");
    }
    outcome
}

fn run_task(tracker: &mut LineageTracker, query: &str, dialect: &str) -> Result<(), SqlTaskError> {
    // Normalización canónica primero: valida dialecto y sintaxis.
    let statements = lineage_sql::normalize(query, dialect)?;
    let lineage = lineage_sql::extract_tables(&statements.join(";\n"), dialect)?;

    let Some(step_name) = tracker.context().current_step.clone() else {
        warn!("sin contexto de linaje activo; se omite el linaje SQL");
        return Ok(());
    };

    let (job, run) = match tracker.context_mut().steps.get_mut(&step_name) {
        Some(step) => {
            // El facet sql se sobreescribe en cada llamada: refleja la
            // última consulta observada para este run.
            step.run
                .facets
                .insert("sql".to_string(), Facet::Sql(SqlFacet { query: query.to_string() }));
            (step.job.clone(), step.run.clone())
        }
        None => {
            warn!(step = %step_name, "step ausente del contexto de linaje; se omite el linaje SQL");
            return Ok(());
        }
    };

    let inputs = datasets(&lineage.in_tables);
    let outputs = datasets(&lineage.out_tables);
    let event = RunEvent::new(RunState::Other, job, run, PRODUCER_SQL).with_io(inputs, outputs);
    tracker.client().emit(&event)?;
    Ok(())
}

fn datasets(tables: &[TableReference]) -> Vec<Dataset> {
    tables.iter()
          .map(|table| Dataset::new(table.qualified(), table.name.clone()))
          .collect()
}
