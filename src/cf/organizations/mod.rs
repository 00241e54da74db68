//! Space, organization and organization manager module

mod api;
mod models;

pub use models::{ManagerRecord, OrganizationRecord, SpaceRecord};
