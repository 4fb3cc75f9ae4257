//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `parser.rs` — maintainers.txt text to an alias list.
//! - `aliases.rs` — identifier/alias table loading and lookups.
//! - `validation.rs` — empty/unknown maintainer checks.
//! - `ownership.rs` — fractional ownership shares + report loading.
//! - `pipeline.rs` — repositories + text source to a validated report.
//! - `github.rs` — organization listing and raw file fetch.
//! - `cache.rs` — on-disk `<repo>--maintainers.txt` cache.
//! - `chart.rs` — SVG pie chart of ownership shares.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`github`, `cache`).
//! - Keep command handlers thin; delegate to services.

pub mod aliases;
pub mod cache;
pub mod chart;
pub mod github;
pub mod output;
pub mod ownership;
pub mod parser;
pub mod pipeline;
pub mod validation;
