//! Cloud Foundry API client module
//!
//! This module provides the client for the platform's v2 REST API, the
//! typed rows the report builder consumes, and the CLI session it runs under.

mod client;
pub mod organizations;
pub mod services;
mod session;
pub mod traits;

use serde::Deserialize;

pub use client::{CfClient, PaginationInfo};
pub use organizations::{ManagerRecord, OrganizationRecord, SpaceRecord};
pub use services::{ServiceInstanceRecord, ServicePlanRecord, ServiceRecord};
pub use session::{Session, SessionResolver};
pub use traits::{CfApi, ListResponse, PaginatedResponse};

/// Metadata block attached to every v2 resource
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Metadata {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub url: String,
}

/// A single v2 resource: metadata plus the typed entity
#[derive(Deserialize, Debug, Clone)]
pub struct Resource<E> {
    #[serde(default)]
    pub metadata: Metadata,
    pub entity: E,
}
