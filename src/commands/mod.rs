//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `data.rs` — validate/generate dataset commands.
//! - `lookup.rs` — check/resolve/suggest/interaction/side-effects/interactive.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate lookup logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod data;
pub mod lookup;

pub use data::handle_data_commands;
pub use lookup::handle_lookup_commands;
