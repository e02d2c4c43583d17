//! Propiedades observables del tracker de ciclo de vida sobre un flow
//! completo, verificadas contra el transporte en memoria.

use flowlineage_rust::{Flow, FlowError, FnStep, LineageTracker};
use lineage_client::{FailingTransport, InMemoryTransport, LineageClient, Transport, TransportError};
use lineage_core::constants::{PRODUCER_LIFECYCLE, SCHEDULER_NAMESPACE};
use lineage_core::{Facet, RunState};

fn tracker_with_buffer(flow_name: &str) -> (LineageTracker, InMemoryTransport) {
    let transport = InMemoryTransport::new();
    let handle = transport.clone();
    (LineageTracker::new(flow_name, LineageClient::new(Box::new(transport))), handle)
}

fn three_step_flow() -> Flow {
    Flow::new("Demo").add_step(Box::new(FnStep::new("start", |_| Ok(()))))
                     .add_step(Box::new(FnStep::new("transform", |_| Ok(()))))
                     .add_step(Box::new(FnStep::new("end", |_| Ok(()))))
}

#[test]
fn successful_flow_emits_expected_sequence() {
    let (mut tracker, events) = tracker_with_buffer("Demo");
    three_step_flow().run(&mut tracker).expect("flow should complete");

    let emitted = events.events();
    let summary: Vec<(&str, RunState)> = emitted.iter()
                                                .map(|e| (e.job.name.as_str(), e.event_type))
                                                .collect();
    assert_eq!(summary,
               vec![("Demo", RunState::Start),
                    ("Demo.start", RunState::Start),
                    ("Demo.start", RunState::Complete),
                    ("Demo.transform", RunState::Start),
                    ("Demo.transform", RunState::Complete),
                    ("Demo.end", RunState::Start),
                    ("Demo.end", RunState::Complete),
                    ("Demo", RunState::Complete)]);

    for event in &emitted {
        assert_eq!(event.producer, PRODUCER_LIFECYCLE);
    }
}

#[test]
fn flow_run_id_is_stable_between_start_and_complete() {
    let (mut tracker, events) = tracker_with_buffer("Demo");
    three_step_flow().run(&mut tracker).expect("flow should complete");

    let emitted = events.events();
    let flow_events: Vec<_> = emitted.iter().filter(|e| e.job.name == "Demo").collect();
    assert_eq!(flow_events.len(), 2);
    assert_eq!(flow_events[0].run.run_id, flow_events[1].run.run_id);
    assert_eq!(flow_events[0].job.namespace, SCHEDULER_NAMESPACE);
}

#[test]
fn every_step_links_to_the_retained_flow_run() {
    let (mut tracker, events) = tracker_with_buffer("Demo");
    three_step_flow().run(&mut tracker).expect("flow should complete");

    let emitted = events.events();
    let flow_run_id = emitted[0].run.run_id;
    for event in emitted.iter().filter(|e| e.job.name != "Demo") {
        match event.run.facets.get("parent") {
            Some(Facet::Parent(parent)) => {
                assert_eq!(parent.run.run_id, flow_run_id);
                assert_eq!(parent.job.namespace, SCHEDULER_NAMESPACE);
                assert_eq!(parent.job.name, "Demo");
            }
            other => panic!("missing parent facet on {}: {other:?}", event.job.name),
        }
    }
}

#[test]
fn failing_step_emits_fail_events_and_returns_original_error() {
    let (mut tracker, events) = tracker_with_buffer("Demo");
    let mut flow = Flow::new("Demo").add_step(Box::new(FnStep::new("start", |_| Ok(()))))
                                    .add_step(Box::new(FnStep::new("transform", |_| {
                                        Err("la tabla fuente no existe".into())
                                    })));

    let err = flow.run(&mut tracker).expect_err("flow should fail");
    match &err {
        FlowError::StepFailed { step, source } => {
            assert_eq!(step, "transform");
            assert_eq!(source.to_string(), "la tabla fuente no existe");
        }
        other => panic!("unexpected error: {other}"),
    }

    let emitted = events.events();
    let summary: Vec<(&str, RunState)> = emitted.iter()
                                                .map(|e| (e.job.name.as_str(), e.event_type))
                                                .collect();
    assert_eq!(summary,
               vec![("Demo", RunState::Start),
                    ("Demo.start", RunState::Start),
                    ("Demo.start", RunState::Complete),
                    ("Demo.transform", RunState::Start),
                    ("Demo", RunState::Fail),
                    ("Demo.transform", RunState::Fail)]);

    // el FAIL del flow reutiliza el run retenido del step start
    assert_eq!(emitted[4].run.run_id, emitted[0].run.run_id);
}

#[test]
fn no_flow_complete_without_end_step() {
    let (mut tracker, events) = tracker_with_buffer("Demo");
    let mut flow = Flow::new("Demo").add_step(Box::new(FnStep::new("start", |_| Ok(()))))
                                    .add_step(Box::new(FnStep::new("transform", |_| Ok(()))));
    flow.run(&mut tracker).expect("flow should complete");

    let flow_completes = events.events()
                               .iter()
                               .filter(|e| e.job.name == "Demo" && e.event_type == RunState::Complete)
                               .count();
    assert_eq!(flow_completes, 0);
}

#[test]
fn flow_without_start_step_emits_no_flow_start() {
    let (mut tracker, events) = tracker_with_buffer("Demo");
    let mut flow = Flow::new("Demo").add_step(Box::new(FnStep::new("transform", |_| Ok(()))))
                                    .add_step(Box::new(FnStep::new("end", |_| Ok(()))));
    flow.run(&mut tracker).expect("flow should complete");

    let emitted = events.events();
    // sin step start no hay run de flow: ni START ni COMPLETE de flow
    assert!(emitted.iter().all(|e| e.job.name != "Demo"));
    assert_eq!(emitted.len(), 4);
}

#[test]
fn emission_failure_never_masks_the_step_error() {
    let client = LineageClient::new(Box::new(FailingTransport));
    let mut tracker = LineageTracker::new("Demo", client);

    // before_step fallará al emitir, pero la ruta de fallo del step se
    // ejercita directamente sobre los hooks:
    tracker.after_step_failure("transform"); // no debe entrar en pánico ni devolver error

    let mut flow = Flow::new("Demo").add_step(Box::new(FnStep::new("start", |_| Ok(()))));
    let err = flow.run(&mut tracker).expect_err("emission should fail");
    assert!(matches!(err, FlowError::Tracker(_)));
}

/// Acepta todo salvo los eventos FAIL: ejercita la supresión de errores
/// de emisión en la ruta de fallo.
struct FailOnFailTransport {
    inner: InMemoryTransport,
}

impl Transport for FailOnFailTransport {
    fn emit(&self, event: &lineage_core::RunEvent) -> Result<(), TransportError> {
        if event.event_type == RunState::Fail {
            return Err(TransportError::Config("fail events rejected".to_string()));
        }
        self.inner.emit(event)
    }
}

#[test]
fn step_error_survives_fail_emission_failure() {
    let inner = InMemoryTransport::new();
    let handle = inner.clone();
    let client = LineageClient::new(Box::new(FailOnFailTransport { inner }));
    let mut tracker = LineageTracker::new("Demo", client);

    let mut flow = Flow::new("Demo").add_step(Box::new(FnStep::new("start", |_| Ok(()))))
                                    .add_step(Box::new(FnStep::new("transform", |_| {
                                        Err("fallo de negocio".into())
                                    })));

    let err = flow.run(&mut tracker).expect_err("step fails");
    match err {
        FlowError::StepFailed { step, source } => {
            assert_eq!(step, "transform");
            assert_eq!(source.to_string(), "fallo de negocio");
        }
        other => panic!("unexpected error: {other}"),
    }

    // ningún FAIL llegó al buffer y aun así el error original se devolvió
    assert!(handle.events().iter().all(|e| e.event_type != RunState::Fail));
}
