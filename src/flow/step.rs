//! Trait que define un step ejecutable y el contexto que recibe.

use crate::errors::{SqlTaskError, StepError};
use crate::tracker::LineageTracker;

pub type StepResult = Result<(), StepError>;

/// Un step del flow. El nombre debe ser estable y único dentro del flow;
/// los nombres `start` y `end` marcan la apertura y el cierre del run a
/// nivel de flow.
pub trait FlowStep {
    fn name(&self) -> &str;

    /// Cuerpo del step. Un `Err` detiene el flow y el runner lo devuelve
    /// sin modificar.
    fn run(&mut self, ctx: &mut StepCtx<'_>) -> StepResult;
}

/// Contexto entregado al cuerpo de cada step: el handle de seguimiento,
/// enhebrado explícitamente en lugar de un estado ambiental.
pub struct StepCtx<'a> {
    pub tracker: &'a mut LineageTracker,
}

impl StepCtx<'_> {
    pub fn flow_name(&self) -> &str {
        self.tracker.flow_name()
    }

    /// Extrae linaje del SQL dado y lo emite correlacionado al step
    /// vigente. Ver [`crate::sql::execute_sql`].
    pub fn execute_sql(&mut self, query: &str, dialect: &str) -> Result<(), SqlTaskError> {
        crate::sql::execute_sql(self.tracker, query, dialect)
    }
}

/// Adaptador para definir steps con un closure, sin declarar un tipo.
pub struct FnStep<F> {
    name: String,
    body: F,
}

impl<F> FnStep<F> where F: FnMut(&mut StepCtx<'_>) -> StepResult
{
    pub fn new(name: impl Into<String>, body: F) -> Self {
        Self { name: name.into(), body }
    }
}

impl<F> FlowStep for FnStep<F> where F: FnMut(&mut StepCtx<'_>) -> StepResult
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, ctx: &mut StepCtx<'_>) -> StepResult {
        (self.body)(ctx)
    }
}
