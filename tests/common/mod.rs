#![allow(dead_code)]

use remit_hub::application::flow::FlowEngine;
use remit_hub::infrastructure::reference::ReferenceStore;
use remit_hub::infrastructure::simulated::{SimulatedOcr, SimulatedScreening, TracingNotifier};
use std::sync::Arc;

pub fn engine() -> FlowEngine {
    let reference = Arc::new(ReferenceStore::load().unwrap());
    FlowEngine::new(
        reference.clone(),
        Box::new(SimulatedScreening::new(reference.clone())),
        Box::new(SimulatedOcr::new(reference.clone())),
        Box::new(TracingNotifier::new(reference)),
    )
}

pub fn logged_in_engine() -> FlowEngine {
    let mut engine = engine();
    engine.login("soumya", "newgen").unwrap();
    engine
}
