//! REST client for the chat server's v4 HTTP API.
//!
//! # Design
//! - One method per endpoint; a shared decode step maps every failure onto
//!   [`ApiError`] so views can render messages without inspecting transport
//!   details.
//! - Failed requests carry the server's own localized error document; its
//!   message survives into the error for inline display.
//! - Auth rides on the same-origin session cookie, so requests need no
//!   extra headers.

use gloo_net::http::{Request, Response};
use huddle_api_models::{
    ClientConfig, PasswordResetRequest, Preference, ServerError, Team, ThreadList, UserPatch,
    UserProfile,
};
use std::fmt;

/// Failure from the REST layer: HTTP status plus a display message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiError {
    /// HTTP status code; `0` when the request never completed or the body
    /// failed to decode.
    pub status: u16,
    /// Message fit for inline display, preferring the server's localized
    /// error document.
    pub message: String,
}

impl ApiError {
    fn transport(err: &gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn server_error(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.json::<ServerError>().await {
            Ok(doc) if !doc.message.is_empty() => doc.message,
            _ => response.status_text(),
        };
        ApiError { status, message }
    }

    async fn decode<T: for<'de> serde::Deserialize<'de>>(
        response: Response,
    ) -> Result<T, ApiError> {
        if response.ok() {
            response.json::<T>().await.map_err(|err| ApiError {
                status: 0,
                message: err.to_string(),
            })
        } else {
            Err(Self::server_error(response).await)
        }
    }

    async fn expect_ok(response: Response) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else {
            Err(Self::server_error(response).await)
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::transport(&err))?;
        Self::decode(response).await
    }

    /// Fetch the authenticated user's profile.
    pub(crate) async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/v4/users/me").await
    }

    /// Apply a partial profile update and return the refreshed profile.
    pub(crate) async fn patch_me(&self, patch: &UserPatch) -> Result<UserProfile, ApiError> {
        let response = Request::put(&self.url("/api/v4/users/me/patch"))
            .json(patch)
            .map_err(|err| ApiError::transport(&err))?
            .send()
            .await
            .map_err(|err| ApiError::transport(&err))?;
        Self::decode(response).await
    }

    /// Fetch the server's client-visible feature gates.
    pub(crate) async fn get_client_config(&self) -> Result<ClientConfig, ApiError> {
        self.get_json("/api/v4/config/client?format=old").await
    }

    /// Fetch every preference entry owned by the authenticated user.
    pub(crate) async fn get_preferences(&self) -> Result<Vec<Preference>, ApiError> {
        self.get_json("/api/v4/users/me/preferences").await
    }

    /// Upsert preference entries for the user.
    pub(crate) async fn save_preferences(
        &self,
        user_id: &str,
        entries: &[Preference],
    ) -> Result<(), ApiError> {
        let response = Request::put(&self.url(&format!("/api/v4/users/{user_id}/preferences")))
            .json(&entries)
            .map_err(|err| ApiError::transport(&err))?
            .send()
            .await
            .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }

    /// Delete preference entries for the user.
    pub(crate) async fn delete_preferences(
        &self,
        user_id: &str,
        entries: &[Preference],
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!(
            "/api/v4/users/{user_id}/preferences/delete"
        )))
        .json(&entries)
        .map_err(|err| ApiError::transport(&err))?
        .send()
        .await
        .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }

    /// Ask the server to email a password-reset link.
    pub(crate) async fn send_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let body = PasswordResetRequest {
            email: email.to_string(),
        };
        let response = Request::post(&self.url("/api/v4/users/password/reset/send"))
            .json(&body)
            .map_err(|err| ApiError::transport(&err))?
            .send()
            .await
            .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }

    /// Fetch the teams the user belongs to.
    pub(crate) async fn get_my_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_json("/api/v4/users/me/teams").await
    }

    /// Fetch the followed-threads listing for one team.
    pub(crate) async fn get_threads(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> Result<ThreadList, ApiError> {
        self.get_json(&format!(
            "/api/v4/users/{user_id}/teams/{team_id}/threads"
        ))
        .await
    }

    /// Follow or unfollow a thread.
    pub(crate) async fn set_thread_follow(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
        following: bool,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "/api/v4/users/{user_id}/teams/{team_id}/threads/{thread_id}/following"
        ));
        let request = if following {
            Request::put(&url)
        } else {
            Request::delete(&url)
        };
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }

    /// Mark a thread read up to the given time.
    pub(crate) async fn update_thread_read(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
        timestamp_ms: i64,
    ) -> Result<(), ApiError> {
        let response = Request::put(&self.url(&format!(
            "/api/v4/users/{user_id}/teams/{team_id}/threads/{thread_id}/read/{timestamp_ms}"
        )))
        .send()
        .await
        .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }

    /// Mark the thread's most recent reply unread.
    pub(crate) async fn mark_thread_unread(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!(
            "/api/v4/users/{user_id}/teams/{team_id}/threads/{thread_id}/set_unread"
        )))
        .send()
        .await
        .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }

    /// Flip the unread marker at one post (pre-collapsed-threads servers).
    pub(crate) async fn set_post_unread(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!(
            "/api/v4/users/{user_id}/posts/{post_id}/set_unread"
        )))
        .send()
        .await
        .map_err(|err| ApiError::transport(&err))?;
        Self::expect_ok(response).await
    }
}
