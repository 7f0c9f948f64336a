//! Service layer containing lookup logic and side-effect helpers.
//!
//! ## Service map
//! - `fuzzy.rs` — Ratcliff/Obershelp ratio and best-match selection.
//! - `resolver.rs` — free-text drug name -> generic name.
//! - `interactions.rs` — order/separator tolerant pair lookup.
//! - `side_effects.rs` — per-generic side effect lookup.
//! - `check.rs` — assembles the two-drug check report.
//! - `inspect.rs` — dataset summary and file digests.
//! - `generator.rs` — synthetic interaction/side-effect datasets.
//! - `prompt.rs` — interactive line prompt and suggestion picker.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod check;
pub mod fuzzy;
pub mod generator;
pub mod inspect;
pub mod interactions;
pub mod output;
pub mod prompt;
pub mod resolver;
pub mod side_effects;
