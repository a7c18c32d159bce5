//! API helpers for notification settings.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for decoding and error handling.

use crate::services::api::{ApiClient, ApiError};
use huddle_api_models::{UserNotifyProps, UserPatch, UserProfile};

/// Persist an edited notification record and return the refreshed profile.
pub(crate) async fn update_notify_props(
    client: &ApiClient,
    props: UserNotifyProps,
) -> Result<UserProfile, ApiError> {
    let patch = UserPatch {
        notify_props: Some(props),
    };
    client.patch_me(&patch).await
}
