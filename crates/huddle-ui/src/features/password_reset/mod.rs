//! Password-reset request feature wiring.
//!
//! # Design
//! - Address validation runs in plain state code before any network call.
//! - Restrict API calls to this feature layer to honor UI boundaries.
//! - The form swaps to a confirmation once the server accepted the request.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
