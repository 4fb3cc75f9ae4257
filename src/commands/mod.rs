//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `audit.rs` — org listing, fetch/cache, parse, validate, print report.
//! - `report.rs` — shares/graph over a previously emitted report.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod audit;
pub mod report;

pub use audit::handle_audit;
pub use report::{handle_graph, handle_shares};
