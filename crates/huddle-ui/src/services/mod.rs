//! Browser-facing service clients shared across features.

pub(crate) mod api;
pub(crate) mod clipboard;
