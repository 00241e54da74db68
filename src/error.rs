use std::fmt;

/// Broad category of an error, used to decide how the command reacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No connection, login check failed, or not logged in
    Session,
    /// An API call failed (transport, status or decoding)
    Fetch,
    /// An organization could not be resolved into the cache
    Cache,
    /// Command-line flags could not be parsed
    Flag,
}

/// Reasons the CLI session is unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No CLI configuration (or no API target) is available
    NoConnection(String),
    /// The login status could not be determined
    LoginCheck(String),
    /// The configuration holds no access token
    NotLoggedIn,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoConnection(msg) => {
                write!(f, "ERROR: no CLI connection available: {}", msg)
            }
            SessionError::LoginCheck(msg) => {
                write!(f, "Error checking if you are logged in: {}", msg)
            }
            SessionError::NotLoggedIn => {
                write!(f, "Please login before trying to run this command.")
            }
        }
    }
}

/// Custom error type for service-use operations
#[derive(Debug)]
pub enum CfError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// CLI session is unusable
    Session(SessionError),
    /// Organization could not be resolved
    OrgResolution { url: String, source: Box<CfError> },
    /// Flag parsing error
    Flag(String),
}

impl CfError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CfError::Http(_) | CfError::Api { .. } | CfError::Json(_) => ErrorKind::Fetch,
            CfError::Config(_) | CfError::Session(_) => ErrorKind::Session,
            CfError::OrgResolution { .. } => ErrorKind::Cache,
            CfError::Flag(_) => ErrorKind::Flag,
        }
    }
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CfError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CfError::Json(msg) => write!(f, "JSON error: {}", msg),
            CfError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CfError::Session(e) => write!(f, "{}", e),
            CfError::OrgResolution { url, source } => {
                write!(f, "Failed to resolve organization '{}': {}", url, source)
            }
            CfError::Flag(msg) => write!(f, "Invalid flags: {}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Http(e) => Some(e),
            CfError::OrgResolution { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Http(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CfError {
    fn from(err: std::io::Error) -> Self {
        CfError::Config(err.to_string())
    }
}

impl From<SessionError> for CfError {
    fn from(err: SessionError) -> Self {
        CfError::Session(err)
    }
}

/// Result type alias for service-use operations
pub type Result<T> = std::result::Result<T, CfError>;
