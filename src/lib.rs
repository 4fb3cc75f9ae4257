//! Maintainer ownership auditing for a GitHub organization.
//!
//! `audit` turns each repository's `maintainers.txt` into a validated
//! `project => [alias]` report; `shares`/`graph` turn that report into
//! per-maintainer ownership fractions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod services;

pub use domain::errors::ConfigError;
pub use domain::models::{OwnershipShare, ProjectMaintainers, Repository, ValidationResult, Violation};
pub use services::aliases::AliasTable;
pub use services::ownership::aggregate;
pub use services::parser::parse_maintainers;
pub use services::pipeline::{run_audit, AuditOutcome, MaintainersSource};
pub use services::validation::validate;
