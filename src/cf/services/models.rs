//! Service data models

use serde::Deserialize;

/// Service entity from the v2 API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub label: String,
    pub service_plans_url: String,
}

/// Service plan entity from the v2 API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServicePlanRecord {
    pub name: String,
    pub service_instances_url: String,
}

/// Service instance entity from the v2 API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstanceRecord {
    pub name: String,
    pub space_url: String,
}
