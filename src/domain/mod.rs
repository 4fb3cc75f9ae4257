//! Shared data model layer (structs/errors only).
//!
//! ## Purpose
//! - Keep report/DTO structs in one place.
//! - Avoid cyclic imports between services.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — repositories, report mapping, validation and share types.
//! - `errors.rs` — configuration error taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `ProjectMaintainers` is the on-disk report read back by `shares`/`graph`.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod errors;
pub mod models;
