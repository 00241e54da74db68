//! Space and organization API operations

use crate::cf::{CfClient, ListResponse};
use crate::error::Result;

use super::models::{ManagerRecord, OrganizationRecord, SpaceRecord};

impl CfClient {
    /// Fetch the space behind an instance's `space_url`
    pub async fn fetch_space(&self, url: &str) -> Result<SpaceRecord> {
        self.fetch_resource(url, &format!("space '{}'", url)).await
    }

    /// Fetch the organization behind a space's `organization_url`
    pub async fn fetch_organization(&self, url: &str) -> Result<OrganizationRecord> {
        self.fetch_resource(url, &format!("organization '{}'", url))
            .await
    }

    /// List the managers behind an organization's `managers_url`
    pub async fn list_org_managers(&self, url: &str) -> Result<Vec<ManagerRecord>> {
        let error_context = format!("organization managers from '{}'", url);
        self.fetch_all_pages::<ManagerRecord, ListResponse<ManagerRecord>>(url, &error_context)
            .await
    }
}
