//! Service, service plan and service instance module

mod api;
mod models;

pub use models::{ServiceInstanceRecord, ServicePlanRecord, ServiceRecord};
