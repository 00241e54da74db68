//! Common traits for platform API access

use serde::Deserialize;
use std::future::Future;

use crate::cf::{
    CfClient, ManagerRecord, OrganizationRecord, Resource, ServiceInstanceRecord,
    ServicePlanRecord, ServiceRecord, SpaceRecord,
};
use crate::error::Result;

/// The API operations the report builder depends on
///
/// Every `url` argument is a link taken from a parent record (for example a
/// service's `service_plans_url`). Pagination is the implementor's concern:
/// list operations return every row, in upstream order.
pub trait CfApi {
    /// List all services visible to the session
    fn get_services(&self) -> impl Future<Output = Result<Vec<ServiceRecord>>>;

    /// List the plans behind a service's plans link
    fn get_service_plans(&self, url: &str)
        -> impl Future<Output = Result<Vec<ServicePlanRecord>>>;

    /// List the instances behind a plan's instances link
    fn get_service_instances(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<ServiceInstanceRecord>>>;

    /// Fetch the space an instance lives in
    fn get_space(&self, url: &str) -> impl Future<Output = Result<SpaceRecord>>;

    /// Fetch the organization a space belongs to
    fn get_organization(&self, url: &str) -> impl Future<Output = Result<OrganizationRecord>>;

    /// List the managers behind an organization's managers link
    fn get_org_managers(&self, url: &str) -> impl Future<Output = Result<Vec<ManagerRecord>>>;
}

impl CfApi for CfClient {
    async fn get_services(&self) -> Result<Vec<ServiceRecord>> {
        self.list_services().await
    }

    async fn get_service_plans(&self, url: &str) -> Result<Vec<ServicePlanRecord>> {
        self.list_service_plans(url).await
    }

    async fn get_service_instances(&self, url: &str) -> Result<Vec<ServiceInstanceRecord>> {
        self.list_service_instances(url).await
    }

    async fn get_space(&self, url: &str) -> Result<SpaceRecord> {
        self.fetch_space(url).await
    }

    async fn get_organization(&self, url: &str) -> Result<OrganizationRecord> {
        self.fetch_organization(url).await
    }

    async fn get_org_managers(&self, url: &str) -> Result<Vec<ManagerRecord>> {
        self.list_org_managers(url).await
    }
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any list envelope to enable use with
/// `CfClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Total number of pages, if the envelope reports it
    fn total_pages(&self) -> Option<u32>;
    /// Total number of results, if the envelope reports it
    fn total_results(&self) -> Option<u32>;
}

/// Generic v2 list envelope
#[derive(Deserialize, Debug)]
pub struct ListResponse<E> {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Vec<Resource<E>>,
}

impl<E> PaginatedResponse<E> for ListResponse<E> {
    fn into_data(self) -> Vec<E> {
        self.resources.into_iter().map(|r| r.entity).collect()
    }

    fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    fn total_results(&self) -> Option<u32> {
        self.total_results
    }
}
