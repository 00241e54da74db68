//! Platform HTTP client for API interactions

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::cf::traits::PaginatedResponse;
use crate::cf::{Resource, Session};
use crate::config::api;
use crate::error::{CfError, Result};

/// Pagination info returned from first page fetch
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    /// Total number of items across all pages
    pub total_results: u32,
    /// Total number of pages
    pub total_pages: u32,
}

/// Platform API client
pub struct CfClient {
    client: Client,
    /// API endpoint, without trailing slash
    target: String,
    /// Value of the Authorization header
    authorization: String,
}

impl CfClient {
    /// Create a new client for the session's API target
    pub fn new(session: &Session) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(session.skip_ssl_validation)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            target: session.target.trim_end_matches('/').to_string(),
            authorization: session.authorization(),
        }
    }

    /// API endpoint this client talks to
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Turn an API link into a full URL
    ///
    /// Links in v2 entities are endpoint-relative (`/v2/spaces/...`);
    /// absolute URLs are used as given.
    pub(crate) fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        if url.starts_with('/') {
            format!("{}{}", self.target, url)
        } else {
            format!("{}/{}", self.target, url)
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(CfError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| CfError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// Fetch a single resource and return its entity
    pub async fn fetch_resource<E>(&self, url: &str, error_context: &str) -> Result<E>
    where
        E: DeserializeOwned,
    {
        let url = self.resolve_url(url);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let resource: Resource<E> = self.parse_api_response(response, error_context).await?;
        Ok(resource.entity)
    }

    /// Fetch all pages from a paginated list endpoint
    ///
    /// Page 1 is fetched first to learn `total_pages`; the remaining pages are
    /// then fetched concurrently (bounded) and stitched back in page order.
    ///
    /// # Arguments
    /// * `url` - API link (e.g., "/v2/services/abc/service_plans")
    /// * `error_context` - Context for error messages (e.g., "service plans")
    ///
    /// # Type Parameters
    /// * `T` - The row type
    /// * `R` - The envelope type that implements PaginatedResponse<T>
    pub async fn fetch_all_pages<T, R>(&self, url: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let base = self.resolve_url(url);
        let separator = if base.contains('?') { "&" } else { "?" };

        let first_page_url = Self::page_url(&base, separator, 1);
        debug!("Fetching page 1 from: {}", first_page_url);

        let response = self.get(&first_page_url).send().await?;
        let first_resp: R = self.parse_api_response(response, error_context).await?;

        let info = match (first_resp.total_pages(), first_resp.total_results()) {
            (Some(total_pages), total_results) => PaginationInfo {
                total_pages,
                total_results: total_results.unwrap_or(0),
            },
            // No pagination info = single page
            (None, _) => return Ok(first_resp.into_data()),
        };
        let mut all_items = first_resp.into_data();

        debug!(
            "Page 1/{}, total items: {}",
            info.total_pages, info.total_results
        );

        if info.total_pages <= 1 {
            return Ok(all_items);
        }

        let page_futures = (2..=info.total_pages).map(|page_num| {
            let page_url = Self::page_url(&base, separator, page_num);
            self.fetch_single_page::<T, R>(page_url, page_num, error_context)
        });

        let results: Vec<Result<(u32, Vec<T>)>> = stream::iter(page_futures)
            .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
            .collect()
            .await;

        let mut page_results: Vec<(u32, Vec<T>)> = Vec::with_capacity(results.len());
        for result in results {
            page_results.push(result?);
        }

        // Keep upstream order
        page_results.sort_by_key(|(page_num, _)| *page_num);

        for (_, items) in page_results {
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    fn page_url(base: &str, separator: &str, page_num: u32) -> String {
        format!(
            "{}{}results-per-page={}&page={}",
            base,
            separator,
            api::DEFAULT_PAGE_SIZE,
            page_num
        )
    }

    /// Fetch a single page (helper for parallel pagination)
    async fn fetch_single_page<T, R>(
        &self,
        url: String,
        page_num: u32,
        error_context: &str,
    ) -> Result<(u32, Vec<T>)>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(&url).send().await?;

        let page_context = format!("{} (page {})", error_context, page_num);
        let resp: R = self.parse_api_response(response, &page_context).await?;
        let items = resp.into_data();

        debug!("Page {} returned {} items", page_num, items.len());
        Ok((page_num, items))
    }
}

#[cfg(test)]
impl CfClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&Session::new(base_url, "bearer test-token", false))
    }
}
