//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — dataset records, resolution results, report/output structs.
//! - `constants.rs` — dataset file names and lookup defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
