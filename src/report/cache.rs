//! Organization memo keyed by organization URL

use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

use crate::error::{CfError, Result};

use super::Organization;

/// What the cache does when resolving an organization fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Store an empty organization for the URL and carry on; later lookups
    /// of that URL return the empty value without retrying
    #[default]
    CacheFailures,
    /// Propagate the failure and store nothing
    SuccessOnly,
}

impl CachePolicy {
    /// Whether fetch failures are absorbed instead of propagated
    pub fn absorbs_failures(self) -> bool {
        matches!(self, CachePolicy::CacheFailures)
    }
}

/// Memoizes organization resolution for one report build
///
/// Single-threaded: entries live in a `RefCell` and no borrow is held across
/// an await point.
#[derive(Debug, Default)]
pub struct OrgCache {
    entries: RefCell<HashMap<String, Organization>>,
    policy: CachePolicy,
}

impl OrgCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            policy,
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Cached organization for `url`, if any
    pub fn get(&self, url: &str) -> Option<Organization> {
        self.entries.borrow().get(url).cloned()
    }

    /// Number of memoized organization URLs
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Return the organization for `url`, running `fetch` only on a miss
    pub async fn resolve<F, Fut>(&self, url: &str, fetch: F) -> Result<Organization>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Organization>>,
    {
        if let Some(org) = self.get(url) {
            debug!("Organization cache hit: {}", url);
            return Ok(org);
        }

        debug!("Organization cache miss: {}", url);
        let org = match fetch().await {
            Ok(org) => org,
            Err(e) if self.policy.absorbs_failures() => {
                warn!(
                    "Could not resolve organization '{}', reporting it as empty: {}",
                    url, e
                );
                Organization::default()
            }
            Err(e) => {
                return Err(CfError::OrgResolution {
                    url: url.to_string(),
                    source: Box::new(e),
                })
            }
        };

        self.entries
            .borrow_mut()
            .insert(url.to_string(), org.clone());
        Ok(org)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::report::test_support::organization;
    use std::cell::Cell;

    fn failure() -> CfError {
        CfError::Api {
            status: 502,
            message: "Failed to fetch organization".to_string(),
        }
    }

    #[test]
    fn test_default_policy_caches_failures() {
        assert_eq!(CachePolicy::default(), CachePolicy::CacheFailures);
        assert!(CachePolicy::CacheFailures.absorbs_failures());
        assert!(!CachePolicy::SuccessOnly.absorbs_failures());
    }

    #[tokio::test]
    async fn test_resolve_fetches_once_per_url() {
        let cache = OrgCache::default();
        let calls = Cell::new(0);

        for _ in 0..3 {
            let org = cache
                .resolve("/v2/organizations/o-1", || async {
                    calls.set(calls.get() + 1);
                    Ok(organization("acme", &["alice"]))
                })
                .await
                .unwrap();
            assert_eq!(org, organization("acme", &["alice"]));
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_distinct_urls_fetch_separately() {
        let cache = OrgCache::default();
        let calls = Cell::new(0);

        for url in ["/v2/organizations/o-1", "/v2/organizations/o-2"] {
            cache
                .resolve(url, || async {
                    calls.set(calls.get() + 1);
                    Ok(organization(url, &[]))
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.get(), 2);
        assert_eq!(cache.get("/v2/organizations/o-2").unwrap().name, "/v2/organizations/o-2");
    }

    #[tokio::test]
    async fn test_failure_is_cached_as_empty_and_never_retried() {
        let cache = OrgCache::new(CachePolicy::CacheFailures);
        let calls = Cell::new(0);

        let first = cache
            .resolve("/v2/organizations/flaky", || async {
                calls.set(calls.get() + 1);
                Err(failure())
            })
            .await
            .unwrap();
        assert_eq!(first, Organization::default());

        // A later fetch would succeed, but the poisoned entry wins
        let second = cache
            .resolve("/v2/organizations/flaky", || async {
                calls.set(calls.get() + 1);
                Ok(organization("acme", &["alice"]))
            })
            .await
            .unwrap();
        assert_eq!(second, Organization::default());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_success_only_propagates_and_retries() {
        let cache = OrgCache::new(CachePolicy::SuccessOnly);

        let err = cache
            .resolve("/v2/organizations/flaky", || async { Err(failure()) })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cache);
        assert!(cache.is_empty());

        let org = cache
            .resolve("/v2/organizations/flaky", || async {
                Ok(organization("acme", &[]))
            })
            .await
            .unwrap();
        assert_eq!(org.name, "acme");
        assert_eq!(cache.len(), 1);
    }
}
