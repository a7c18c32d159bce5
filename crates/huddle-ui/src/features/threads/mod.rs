//! Followed-threads feature wiring.
//!
//! # Design
//! - Menu entries and their effects resolve in plain state code; the view
//!   only forwards timestamps and executes the resulting commands.
//! - Collapsed-threads gating changes both the entries offered and how
//!   read/unread is carried out, so both decisions live side by side here.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
