//! service-use - Report which orgs and spaces use each marketplace service
//!
//! A CLI tool that walks a Cloud Foundry foundation from services down to
//! the instances provisioned from them, and reports each instance with its
//! space, organization and organization managers.
//!
//! # Features
//!
//! - Uses the session of an already logged-in `cf` CLI
//! - Text or CSV output
//! - Automatic pagination handling
//! - Organization lookups memoized per run
//!
//! # Example
//!
//! ```bash
//! # Indented text report
//! service-use
//!
//! # CSV, without the progress spinner
//! service-use -f csv --batch > service-use.csv
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod ui;

pub use cf::{CfApi, CfClient, Session, SessionResolver};
pub use cli::{Cli, ReportFormat};
pub use error::{CfError, ErrorKind, Result, SessionError};
pub use output::render;
pub use report::{
    run_service_use_command, CachePolicy, Organization, Report, ReportBuilder, Service,
    ServiceInstance, ServicePlan, Space,
};
