//! Runner secuencial de steps con hooks de linaje.
//!
//! Reemplaza el patrón decorador del diseño original por una interfaz
//! explícita: el runner invoca `before_step` / `after_step_success` /
//! `after_step_failure` sobre el tracker alrededor de cada cuerpo de
//! step. Ejecución síncrona, un step a la vez, stop-on-failure.

use crate::errors::FlowError;
use crate::flow::step::{FlowStep, StepCtx};
use crate::tracker::LineageTracker;

/// Definición de un flow: lista ordenada de steps.
pub struct Flow {
    name: String,
    steps: Vec<Box<dyn FlowStep>>,
}

impl Flow {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               steps: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Añade un step al final del flow.
    pub fn add_step(mut self, step: Box<dyn FlowStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Ejecuta todos los steps en orden. En el primer fallo detiene el
    /// flow y devuelve el error original del step dentro de
    /// [`FlowError::StepFailed`]; los eventos FAIL ya fueron intentados
    /// por el tracker.
    pub fn run(&mut self, tracker: &mut LineageTracker) -> Result<(), FlowError> {
        for step in &mut self.steps {
            let step_name = step.name().to_string();
            tracker.before_step(&step_name)?;

            let result = step.run(&mut StepCtx { tracker });
            match result {
                Ok(()) => tracker.after_step_success(&step_name)?,
                Err(source) => {
                    tracker.after_step_failure(&step_name);
                    return Err(FlowError::StepFailed { step: step_name,
                                                       source });
                }
            }
        }
        Ok(())
    }
}
