//! API helpers for password-reset requests.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for error handling.

use crate::services::api::{ApiClient, ApiError};

/// Ask the server to mail a reset link to the (normalized) address.
pub(crate) async fn send_reset_link(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client.send_password_reset(email).await
}
