//! Service API operations

use crate::cf::{CfClient, ListResponse};
use crate::config::api;
use crate::error::Result;

use super::models::{ServiceInstanceRecord, ServicePlanRecord, ServiceRecord};

impl CfClient {
    /// List every service visible to the session (all pages)
    pub async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
        let url = format!("{}/{}", api::BASE_PATH, api::SERVICES);
        self.fetch_all_pages::<ServiceRecord, ListResponse<ServiceRecord>>(&url, "services")
            .await
    }

    /// List the plans behind a service's `service_plans_url`
    pub async fn list_service_plans(&self, url: &str) -> Result<Vec<ServicePlanRecord>> {
        let error_context = format!("service plans from '{}'", url);
        self.fetch_all_pages::<ServicePlanRecord, ListResponse<ServicePlanRecord>>(
            url,
            &error_context,
        )
        .await
    }

    /// List the instances behind a plan's `service_instances_url`
    pub async fn list_service_instances(&self, url: &str) -> Result<Vec<ServiceInstanceRecord>> {
        let error_context = format!("service instances from '{}'", url);
        self.fetch_all_pages::<ServiceInstanceRecord, ListResponse<ServiceInstanceRecord>>(
            url,
            &error_context,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CfError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn list_json(entities: Vec<serde_json::Value>) -> serde_json::Value {
        serde_json::json!({
            "total_results": entities.len(),
            "total_pages": 1,
            "prev_url": null,
            "next_url": null,
            "resources": entities
                .into_iter()
                .map(|e| serde_json::json!({"metadata": {"guid": "g"}, "entity": e}))
                .collect::<Vec<_>>()
        })
    }

    #[tokio::test]
    async fn test_list_services_success() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
                serde_json::json!({"label": "DB", "service_plans_url": "/v2/services/s-1/service_plans"}),
                serde_json::json!({"label": "Cache", "service_plans_url": "/v2/services/s-2/service_plans"}),
            ])))
            .mount(&mock_server)
            .await;

        let services = client.list_services().await.unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].label, "DB");
        assert_eq!(services[1].label, "Cache");
        assert_eq!(
            services[1].service_plans_url,
            "/v2/services/s-2/service_plans"
        );
    }

    #[tokio::test]
    async fn test_list_services_unauthorized() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/services"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        match client.list_services().await.unwrap_err() {
            CfError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("services"));
            }
            other => panic!("Expected CfError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_service_plans_follows_link() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/services/s-1/service_plans"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
                serde_json::json!({"name": "small", "service_instances_url": "/v2/service_plans/p-1/service_instances"}),
            ])))
            .mount(&mock_server)
            .await;

        let plans = client
            .list_service_plans("/v2/services/s-1/service_plans")
            .await
            .unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "small");
    }

    #[tokio::test]
    async fn test_list_service_instances_follows_link() {
        let mock_server = MockServer::start().await;
        let client = CfClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/v2/service_plans/p-1/service_instances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![
                serde_json::json!({"name": "mydb", "space_url": "/v2/spaces/sp-1"}),
                serde_json::json!({"name": "otherdb", "space_url": "/v2/spaces/sp-2"}),
            ])))
            .mount(&mock_server)
            .await;

        let instances = client
            .list_service_instances("/v2/service_plans/p-1/service_instances")
            .await
            .unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].name, "mydb");
        assert_eq!(instances[1].space_url, "/v2/spaces/sp-2");
    }
}
