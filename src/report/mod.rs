//! Service use report
//!
//! The report is a strict tree: services own plans, plans own instances,
//! every instance carries its space and that space's organization by value.
//! It is assembled once by [`ReportBuilder`] and read-only afterwards.

mod builder;
mod cache;
mod commands;

pub use builder::ReportBuilder;
pub use cache::{CachePolicy, OrgCache};
pub use commands::run_service_use_command;

/// Organization with its manager user names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub managers: Vec<String>,
}

/// Space with the organization it belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub name: String,
    pub organization: Organization,
}

/// A provisioned service instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub name: String,
    pub space: Space,
}

/// A plan of a service and the instances created from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    pub name: String,
    pub instances: Vec<ServiceInstance>,
}

/// A marketplace service and its plans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub label: String,
    pub plans: Vec<ServicePlan>,
}

/// One (service, plan, instance) triple of a flattened report
#[derive(Debug, Clone, Copy)]
pub struct ReportRow<'a> {
    pub service: &'a str,
    pub plan: &'a str,
    pub instance: &'a ServiceInstance,
}

impl ReportRow<'_> {
    pub fn org_name(&self) -> &str {
        &self.instance.space.organization.name
    }

    pub fn space_name(&self) -> &str {
        &self.instance.space.name
    }

    pub fn instance_name(&self) -> &str {
        &self.instance.name
    }

    pub fn managers(&self) -> &[String] {
        &self.instance.space.organization.managers
    }
}

/// The assembled report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    services: Vec<Service>,
}

impl Report {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// Services in upstream order
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Flatten the tree into one row per instance, keeping tree order
    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        self.services
            .iter()
            .flat_map(|service| {
                service.plans.iter().flat_map(move |plan| {
                    plan.instances.iter().map(move |instance| ReportRow {
                        service: &service.label,
                        plan: &plan.name,
                        instance,
                    })
                })
            })
            .collect()
    }

    /// Total number of service instances in the report
    pub fn instance_count(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| s.plans.iter())
            .map(|p| p.instances.len())
            .sum()
    }
}
