//! Report assembly: walks service -> plans -> instances -> space -> org

use log::{debug, info, warn};
use std::future::Future;

use crate::cf::{CfApi, ServiceInstanceRecord, ServicePlanRecord, ServiceRecord};
use crate::error::Result;

use super::cache::{CachePolicy, OrgCache};
use super::{Organization, Report, Service, ServiceInstance, ServicePlan, Space};

/// Fetch a collection, then build one node per row, in order
///
/// Rows are resolved one after another; the first error aborts the whole
/// collection.
async fn resolve_collection<R, T, L, F, Fut>(listing: L, mut build: F) -> Result<Vec<T>>
where
    L: Future<Output = Result<Vec<R>>>,
    F: FnMut(R) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let records = listing.await?;
    let mut nodes = Vec::with_capacity(records.len());
    for record in records {
        nodes.push(build(record).await?);
    }
    Ok(nodes)
}

/// Builds a [`Report`] from a [`CfApi`], one request per node
///
/// Each builder owns a fresh [`OrgCache`], so organizations are fetched at
/// most once per distinct URL within one build.
pub struct ReportBuilder<'a, A: CfApi> {
    api: &'a A,
    org_cache: OrgCache,
}

impl<'a, A: CfApi> ReportBuilder<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self::with_policy(api, CachePolicy::default())
    }

    pub fn with_policy(api: &'a A, policy: CachePolicy) -> Self {
        Self {
            api,
            org_cache: OrgCache::new(policy),
        }
    }

    pub fn org_cache(&self) -> &OrgCache {
        &self.org_cache
    }

    /// Walk every service and assemble the full report
    pub async fn build(&self) -> Result<Report> {
        let services =
            resolve_collection(self.api.get_services(), move |s| self.build_service(s)).await?;
        let report = Report::new(services);

        info!(
            "Built report: {} services, {} instances, {} organizations",
            report.services().len(),
            report.instance_count(),
            self.org_cache.len()
        );
        Ok(report)
    }

    async fn build_service(&self, record: ServiceRecord) -> Result<Service> {
        debug!("Resolving plans of service '{}'", record.label);
        let plans = resolve_collection(
            self.api.get_service_plans(&record.service_plans_url),
            move |p| self.build_plan(p),
        )
        .await?;

        Ok(Service {
            label: record.label,
            plans,
        })
    }

    async fn build_plan(&self, record: ServicePlanRecord) -> Result<ServicePlan> {
        debug!("Resolving instances of plan '{}'", record.name);
        let instances = resolve_collection(
            self.api
                .get_service_instances(&record.service_instances_url),
            move |i| self.build_instance(i),
        )
        .await?;

        Ok(ServicePlan {
            name: record.name,
            instances,
        })
    }

    async fn build_instance(&self, record: ServiceInstanceRecord) -> Result<ServiceInstance> {
        let space = self.resolve_space(&record.space_url).await?;
        Ok(ServiceInstance {
            name: record.name,
            space,
        })
    }

    async fn resolve_space(&self, url: &str) -> Result<Space> {
        let record = self.api.get_space(url).await?;
        let organization = self.resolve_organization(&record.organization_url).await?;
        Ok(Space {
            name: record.name,
            organization,
        })
    }

    async fn resolve_organization(&self, url: &str) -> Result<Organization> {
        self.org_cache
            .resolve(url, || self.fetch_organization(url))
            .await
    }

    /// Fetch an organization and its managers, bypassing the cache
    async fn fetch_organization(&self, url: &str) -> Result<Organization> {
        let record = self.api.get_organization(url).await?;

        let managers = match self.api.get_org_managers(&record.managers_url).await {
            Ok(rows) => rows.into_iter().map(|m| m.username).collect(),
            Err(e) if self.org_cache.policy().absorbs_failures() => {
                warn!(
                    "Could not list managers of organization '{}': {}",
                    record.name, e
                );
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Organization {
            name: record.name,
            managers,
        })
    }
}
