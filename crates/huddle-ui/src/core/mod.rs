//! Shared state and domain logic used by every feature slice.

pub mod prefs;
pub mod store;
pub mod theme;
