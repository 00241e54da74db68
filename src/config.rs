/// Configuration constants for the platform API (v2)
pub mod api {
    /// Base path for the v2 API
    pub const BASE_PATH: &str = "/v2";

    /// Services endpoint
    pub const SERVICES: &str = "services";

    /// Page size for list requests (the API caps results-per-page at 100)
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum number of pages fetched concurrently
    pub const MAX_CONCURRENT_PAGE_REQUESTS: usize = 10;
}

/// Configuration constants for the CF CLI session file
pub mod session {
    /// Environment variable overriding the directory that contains `.cf/`
    pub const HOME_ENV_VAR: &str = "CF_HOME";

    /// Directory holding the CF CLI configuration
    pub const DIR_NAME: &str = ".cf";

    /// CF CLI configuration file name
    pub const FILE_NAME: &str = "config.json";

    /// JWT claim carrying the user name
    pub const USER_NAME_CLAIM: &str = "user_name";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default value of the format flag (anything but "csv" renders text)
    pub const FORMAT: &str = "format";
}

/// Report layout constants
pub mod report {
    /// CSV header columns
    pub const CSV_HEADERS: &[&str] = &[
        "ServiceName",
        "PlanName",
        "OrgName",
        "SpaceName",
        "InstanceName",
        "Managers",
    ];

    /// Separator between CSV fields
    pub const CSV_FIELD_SEPARATOR: &str = ", ";

    /// Separator between managers inside the CSV managers field
    pub const CSV_MANAGER_SEPARATOR: &str = "|";

    /// Separator between managers in text output
    pub const TEXT_MANAGER_SEPARATOR: &str = ",";
}
