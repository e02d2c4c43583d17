//! Tracker de ciclo de vida: hooks explícitos alrededor de cada step.
//!
//! Contrato:
//! - `before_step`: registra el Job/Run del step (con facet de enlace al
//!   run del flow) y emite su START; si el step es `start`, crea y emite
//!   antes el run a nivel de flow.
//! - `after_step_success`: emite el COMPLETE del step; si el step es
//!   `end` y el run de flow existe, emite también el COMPLETE del flow.
//! - `after_step_failure`: intenta emitir FAIL para el flow (creándolo si
//!   aún no existe) y para el step. Los errores de emisión en esta ruta
//!   se registran y se descartan: el error de negocio del step es el
//!   autoritativo y el runner lo devuelve sin tocar.

use lineage_client::LineageClient;
use lineage_core::constants::{END_STEP, PRODUCER_LIFECYCLE, SCHEDULER_NAMESPACE, START_STEP};
use lineage_core::{Facet, Job, ParentRunFacet, Run, RunEvent, RunState};
use tracing::warn;
use uuid::Uuid;

use super::context::{FlowContext, TrackedRun};
use crate::errors::TrackerError;

/// Handle explícito de seguimiento, enhebrado por el runner a través de
/// los steps. Posee el contexto de la invocación y el cliente de emisión.
pub struct LineageTracker {
    flow_name: String,
    client: LineageClient,
    ctx: FlowContext,
    /// Candidato a run-id de flow generado en el último `before_step`.
    /// Si el flow falla antes de que exista su run, el FAIL se emite con
    /// este identificador.
    last_flow_run_id: Option<Uuid>,
}

impl LineageTracker {
    pub fn new(flow_name: impl Into<String>, client: LineageClient) -> Self {
        Self { flow_name: flow_name.into(),
               client,
               ctx: FlowContext::new(),
               last_flow_run_id: None }
    }

    pub fn flow_name(&self) -> &str {
        &self.flow_name
    }

    pub fn context(&self) -> &FlowContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut FlowContext {
        &mut self.ctx
    }

    pub fn client(&self) -> &LineageClient {
        &self.client
    }

    /// Hook de entrada: debe ejecutarse antes del cuerpo del step. Los
    /// errores de emisión aquí se propagan (no hay fallo de negocio que
    /// enmascarar todavía).
    pub fn before_step(&mut self, step_name: &str) -> Result<(), TrackerError> {
        // Run-id de flow: se reutiliza el retenido si ya existe; si no,
        // se genera un candidato fresco que queda disponible para la ruta
        // de fallo.
        let flow_run_id = self.ctx
                              .flow
                              .as_ref()
                              .map(|flow| flow.run.run_id)
                              .unwrap_or_else(Uuid::new_v4);
        self.last_flow_run_id = Some(flow_run_id);

        let step_run_id = Uuid::new_v4();
        let step = self.build_step_run(step_name, step_run_id, flow_run_id);
        self.ctx.steps.insert(step_name.to_string(), step.clone());
        self.ctx.current_step = Some(step_name.to_string());

        if step_name == START_STEP && self.ctx.flow.is_none() {
            let flow = self.build_flow_run(flow_run_id);
            self.emit(RunState::Start, &flow)?;
            self.ctx.flow = Some(flow);
        }

        self.emit(RunState::Start, &step)?;
        Ok(())
    }

    /// Hook de salida exitosa: exactamente un evento terminal por step.
    pub fn after_step_success(&self, step_name: &str) -> Result<(), TrackerError> {
        match self.ctx.steps.get(step_name) {
            Some(step) => self.emit(RunState::Complete, step)?,
            None => warn!(step = %step_name, "after_step_success sin before_step previo"),
        }

        if step_name == END_STEP {
            if let Some(flow) = &self.ctx.flow {
                self.emit(RunState::Complete, flow)?;
            }
        }
        Ok(())
    }

    /// Hook de salida con fallo. Nunca devuelve error: la observabilidad
    /// no puede desplazar al error de negocio del step.
    pub fn after_step_failure(&self, step_name: &str) {
        let fallback;
        let flow = match &self.ctx.flow {
            Some(flow) => flow,
            None => {
                let run_id = self.last_flow_run_id.unwrap_or_else(Uuid::new_v4);
                fallback = self.build_flow_run(run_id);
                &fallback
            }
        };

        if let Err(e) = self.emit(RunState::Fail, flow) {
            warn!(flow = %self.flow_name, error = %e, "no se pudo emitir el FAIL del flow");
        }
        match self.ctx.steps.get(step_name) {
            Some(step) => {
                if let Err(e) = self.emit(RunState::Fail, step) {
                    warn!(step = %step_name, error = %e, "no se pudo emitir el FAIL del step");
                }
            }
            None => warn!(step = %step_name, "after_step_failure sin before_step previo"),
        }
    }

    fn emit(&self, state: RunState, tracked: &TrackedRun) -> Result<(), TrackerError> {
        let event = RunEvent::new(state, tracked.job.clone(), tracked.run.clone(), PRODUCER_LIFECYCLE);
        self.client.emit(&event)?;
        Ok(())
    }

    /// Job `<FlowName>.<StepName>` en el namespace del flow, con facet
    /// `parent` enlazando al run y job del flow.
    fn build_step_run(&self, step_name: &str, step_run_id: Uuid, flow_run_id: Uuid) -> TrackedRun {
        let job = Job::new(self.flow_name.clone(), format!("{}.{}", self.flow_name, step_name));
        let parent = Facet::Parent(ParentRunFacet::new(flow_run_id, SCHEDULER_NAMESPACE, &self.flow_name));
        let run = Run::new(step_run_id).with_facet("parent", parent);
        TrackedRun { job, run }
    }

    fn build_flow_run(&self, run_id: Uuid) -> TrackedRun {
        TrackedRun { job: Job::new(SCHEDULER_NAMESPACE, self.flow_name.clone()),
                     run: Run::new(run_id) }
    }
}
