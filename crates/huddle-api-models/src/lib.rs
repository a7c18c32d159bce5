#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Huddle chat server REST API.
//!
//! The server predates this client and keeps a legacy wire encoding for
//! per-user preferences: every value travels as a string, booleans included
//! (`"true"`/`"false"`). These types stay faithful to that shape so request
//! and response bodies survive untouched; typed interpretations live next to
//! the views that edit them.

use serde::{Deserialize, Serialize};

/// Preference category holding one entry per saved (flagged) post.
pub const CATEGORY_FLAGGED_POST: &str = "flagged_post";

/// Preference category for client display settings.
pub const CATEGORY_DISPLAY_SETTINGS: &str = "display_settings";

/// Display-settings preference name for the collapsed reply threads opt-in.
pub const PREF_COLLAPSED_REPLY_THREADS: &str = "collapsed_reply_threads";

/// Truthy test for the server's boolean-as-string preference flags.
#[must_use]
pub fn flag_is_true(value: &str) -> bool {
    value == "true"
}

/// Render a bool in the server's legacy string encoding.
#[must_use]
pub const fn flag_from_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Error document returned by the chat server on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerError {
    /// Stable identifier for the error class (server-side i18n key).
    #[serde(default)]
    pub id: String,
    /// Human-readable message, already localized by the server.
    pub message: String,
    /// HTTP status echoed in the body.
    #[serde(default)]
    pub status_code: u16,
}

/// Flat per-user notification preference record.
///
/// Every field is optional on the wire; the settings form supplies
/// documented defaults for whatever is absent when it derives its editable
/// state. Activity levels range over `all`/`mention`/`none`, push status
/// over `online`/`away`/`offline`, comments over `any`/`root`/`never`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserNotifyProps {
    /// Desktop notification activity level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<String>,
    /// Desktop activity level for followed threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_threads: Option<String>,
    /// Whether desktop notifications play a sound (boolean-as-string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_sound: Option<String>,
    /// Sound name for desktop notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_notification_sound: Option<String>,
    /// Whether incoming calls ring on desktop (boolean-as-string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calls_desktop_sound: Option<String>,
    /// Ring sound name for incoming calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calls_notification_sound: Option<String>,
    /// Email notification switch (boolean-as-string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Email activity level for followed threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_threads: Option<String>,
    /// Mobile push activity level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<String>,
    /// Push activity level for followed threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_threads: Option<String>,
    /// Availability states that allow push delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_status: Option<String>,
    /// Reply-thread notification level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Comma-separated list of words that trigger a mention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_keys: Option<String>,
    /// Whether the user's first name triggers a mention (boolean-as-string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Whether channel-wide mentions trigger (boolean-as-string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Whether the out-of-office auto responder is on (boolean-as-string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_responder_active: Option<String>,
    /// Auto responder reply text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_responder_message: Option<String>,
}

/// Server-side user profile, trimmed to the fields the client consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Stable user identifier.
    pub id: String,
    /// Login/mention handle.
    pub username: String,
    /// Display first name (may be empty).
    #[serde(default)]
    pub first_name: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Notification preference record, when the server has one stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_props: Option<UserNotifyProps>,
}

/// Partial profile update accepted by `PUT /api/v4/users/me/patch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement notification preference record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_props: Option<UserNotifyProps>,
}

/// Body for `POST /api/v4/users/password/reset/send`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    /// Normalized (trimmed, lowercased) account email.
    pub email: String,
}

/// One entry in the user's server-side preference store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preference {
    /// Owning user id.
    #[serde(default)]
    pub user_id: String,
    /// Grouping category, e.g. [`CATEGORY_FLAGGED_POST`].
    pub category: String,
    /// Entry name within the category (often an object id).
    pub name: String,
    /// Stored value, string-encoded.
    pub value: String,
}

/// Server-owned feature gates pushed to clients at boot.
///
/// Like the preference records, values arrive as strings: `"true"`/`"false"`
/// for switches, and `disabled`/`default_off`/`default_on` for the collapsed
/// threads rollout stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientConfig {
    /// Public base URL of this server, used to build permalinks.
    #[serde(rename = "SiteURL")]
    pub site_url: String,
    /// Rollout stage for collapsed reply threads.
    pub collapsed_threads: String,
    /// Whether the admin enabled mobile push delivery.
    pub send_push_notifications: String,
    /// Whether the admin enabled the out-of-office auto responder.
    pub enable_auto_responder: String,
    /// Whether the calls plugin may ring the desktop client.
    pub calls_ringing_enabled: String,
}

impl ClientConfig {
    /// True when the admin enabled mobile push delivery.
    #[must_use]
    pub fn push_enabled(&self) -> bool {
        flag_is_true(&self.send_push_notifications)
    }

    /// True when the auto responder feature is available to users.
    #[must_use]
    pub fn auto_responder_enabled(&self) -> bool {
        flag_is_true(&self.enable_auto_responder)
    }

    /// True when call ring sounds are configurable.
    #[must_use]
    pub fn calls_ringing(&self) -> bool {
        flag_is_true(&self.calls_ringing_enabled)
    }
}

/// Team the user belongs to; permalinks embed the URL slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    /// Stable team identifier.
    pub id: String,
    /// URL slug, e.g. `team-name-1`.
    pub name: String,
    /// Human-readable team name.
    #[serde(default)]
    pub display_name: String,
}

/// Root post of a followed thread, trimmed to what thread rows render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadPost {
    /// Post identifier; doubles as the thread identifier.
    pub id: String,
    /// Author user id.
    #[serde(default)]
    pub user_id: String,
    /// Message text.
    #[serde(default)]
    pub message: String,
}

/// One followed thread as returned by the threads listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserThread {
    /// Thread identifier (the root post id).
    pub id: String,
    /// Total reply count.
    #[serde(default)]
    pub reply_count: u64,
    /// Timestamp of the newest reply, epoch milliseconds.
    #[serde(default)]
    pub last_reply_at: i64,
    /// Replies newer than the user's last view.
    #[serde(default)]
    pub unread_replies: u64,
    /// Unread replies mentioning the user.
    #[serde(default)]
    pub unread_mentions: u64,
    /// Whether the user currently follows the thread.
    #[serde(default)]
    pub is_following: bool,
    /// The root post, embedded for display.
    #[serde(default)]
    pub post: ThreadPost,
}

/// Paged thread listing for one user and team.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadList {
    /// Threads in the requested page.
    #[serde(default)]
    pub threads: Vec<UserThread>,
    /// Total follow count across all pages.
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::{ClientConfig, ServerError, UserNotifyProps, UserProfile, flag_from_bool};

    #[test]
    fn notify_props_tolerate_sparse_records() {
        let props: UserNotifyProps = serde_json::from_str(r#"{"desktop":"mention"}"#).unwrap();
        assert_eq!(props.desktop.as_deref(), Some("mention"));
        assert!(props.push.is_none());
        assert!(props.mention_keys.is_none());
    }

    #[test]
    fn sparse_patch_omits_absent_fields() {
        let props = UserNotifyProps {
            desktop: Some("all".to_string()),
            ..UserNotifyProps::default()
        };
        let body = serde_json::to_string(&props).unwrap();
        assert_eq!(body, r#"{"desktop":"all"}"#);
    }

    #[test]
    fn client_config_gates_parse_legacy_strings() {
        let config: ClientConfig = serde_json::from_str(
            r#"{
                "SiteURL": "http://localhost:8065",
                "CollapsedThreads": "default_off",
                "SendPushNotifications": "true",
                "EnableAutoResponder": "false"
            }"#,
        )
        .unwrap();
        assert!(config.push_enabled());
        assert!(!config.auto_responder_enabled());
        assert!(!config.calls_ringing());
        assert_eq!(config.collapsed_threads, "default_off");
        assert_eq!(config.site_url, "http://localhost:8065");
    }

    #[test]
    fn server_error_body_defaults_optional_fields() {
        let err: ServerError = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(err.message, "boom");
        assert!(err.id.is_empty());
        assert_eq!(err.status_code, 0);
    }

    #[test]
    fn profile_defaults_keep_missing_notify_props() {
        let user: UserProfile =
            serde_json::from_str(r#"{"id":"u1","username":"alice"}"#).unwrap();
        assert!(user.notify_props.is_none());
        assert!(user.first_name.is_empty());
        assert_eq!(flag_from_bool(true), "true");
    }

    #[test]
    fn thread_listing_defaults_unset_counters() {
        let list: super::ThreadList = serde_json::from_str(
            r#"{"threads":[{"id":"t1","post":{"id":"t1","message":"hi"}}],"total":1}"#,
        )
        .unwrap();
        assert_eq!(list.total, 1);
        let thread = &list.threads[0];
        assert_eq!(thread.unread_replies, 0);
        assert!(!thread.is_following);
        assert_eq!(thread.post.message, "hi");
    }
}
