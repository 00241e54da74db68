//! CLI session resolution from the CF CLI configuration file

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::session as session_config;
use crate::error::{Result, SessionError};

/// The subset of `~/.cf/config.json` this tool reads
#[derive(Deserialize, Debug, Default)]
struct CfConfigFile {
    #[serde(rename = "Target", default)]
    target: String,
    #[serde(rename = "AccessToken", default)]
    access_token: String,
    #[serde(rename = "SSLDisabled", default)]
    ssl_disabled: bool,
}

/// A logged-in CLI session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// API endpoint (e.g. `https://api.sys.example.com`)
    pub target: String,
    /// Access token as stored by the CLI (usually `bearer <jwt>`)
    pub access_token: String,
    /// Skip TLS certificate validation
    pub skip_ssl_validation: bool,
}

impl Session {
    pub fn new(target: &str, access_token: &str, skip_ssl_validation: bool) -> Self {
        Self {
            target: target.to_string(),
            access_token: access_token.to_string(),
            skip_ssl_validation,
        }
    }

    /// Authorization header value, always with the `bearer` scheme
    pub fn authorization(&self) -> String {
        let token = self.access_token.trim();
        match token.get(..7) {
            Some(scheme) if scheme.eq_ignore_ascii_case("bearer ") => {
                format!("bearer {}", token[7..].trim_start())
            }
            _ => format!("bearer {}", token),
        }
    }

    /// User name from the access token's `user_name` claim
    ///
    /// Returns an empty string when the token cannot be decoded.
    pub fn username(&self) -> String {
        match Self::user_name_claim(&self.authorization()["bearer ".len()..]) {
            Some(name) => name,
            None => {
                debug!("Could not read user name from access token");
                String::new()
            }
        }
    }

    fn user_name_claim(jwt: &str) -> Option<String> {
        let payload = jwt.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
        claims[session_config::USER_NAME_CLAIM]
            .as_str()
            .map(|s| s.to_string())
    }
}

/// Session resolution with fallback logic
pub struct SessionResolver {
    config_path: PathBuf,
}

impl SessionResolver {
    /// Create a resolver for the given CF home (or the default location)
    ///
    /// The configuration file is `<cf_home>/.cf/config.json`; without an
    /// explicit home the user's home directory is used.
    pub fn new(cf_home: Option<&Path>) -> Self {
        let home = cf_home
            .map(Path::to_path_buf)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            config_path: home
                .join(session_config::DIR_NAME)
                .join(session_config::FILE_NAME),
        }
    }

    /// Path of the configuration file this resolver reads
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve the session, checking connection and login state
    pub fn resolve(&self) -> Result<Session> {
        debug!(
            "Looking for CLI configuration at: {}",
            self.config_path.display()
        );

        if !self.config_path.exists() {
            return Err(SessionError::NoConnection(format!(
                "{} not found, run 'cf api' and 'cf login' first",
                self.config_path.display()
            ))
            .into());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            SessionError::LoginCheck(format!(
                "could not read {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        let config: CfConfigFile = serde_json::from_str(&content).map_err(|e| {
            SessionError::LoginCheck(format!(
                "could not parse {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if config.target.trim().is_empty() {
            return Err(SessionError::NoConnection(format!(
                "no API endpoint set in {}",
                self.config_path.display()
            ))
            .into());
        }

        if config.access_token.trim().is_empty() {
            return Err(SessionError::NotLoggedIn.into());
        }

        debug!("Using API endpoint: {}", config.target);
        Ok(Session {
            target: config.target,
            access_token: config.access_token,
            skip_ssl_validation: config.ssl_disabled,
        })
    }
}
