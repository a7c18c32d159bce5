//! Notification settings feature wiring.
//!
//! # Design
//! - Keep the record-to-form mapping in plain state code, testable off-wasm.
//! - Restrict API calls to this feature layer to honor UI boundaries.
//! - Collapsed-section summaries derive from the same state the editors use.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
