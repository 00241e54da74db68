//! Space and organization data models

use serde::Deserialize;

/// Space entity from the v2 API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpaceRecord {
    pub name: String,
    pub organization_url: String,
}

/// Organization entity from the v2 API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRecord {
    pub name: String,
    pub managers_url: String,
}

/// User entity returned by an organization's managers link
///
/// Client (non-user) accounts carry no `username`; it defaults to empty.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerRecord {
    #[serde(default)]
    pub username: String,
}
