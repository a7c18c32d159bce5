//! Notification settings feature state.
//!
//! # Design
//! - One editable snapshot per settings panel, derived from the server
//!   record; typed enums back the radio groups, strings carry free text.
//! - Absent record fields become the documented defaults at derive time, so
//!   the rest of the slice never sees an `Option`.
//! - Serialize writes every owned field back in the server's legacy string
//!   encoding, booleans included.

use crate::features::notifications::logic::{build_mention_keys, parse_mention_keys};
use huddle_api_models::{UserNotifyProps, UserProfile, flag_from_bool, flag_is_true};

/// Notification sound choices offered for desktop alerts.
pub const DESKTOP_SOUNDS: [&str; 6] = ["Bing", "Crackle", "Down", "Hello", "Ripple", "Upstairs"];

/// Ring sound choices offered for incoming calls.
pub const CALL_SOUNDS: [&str; 4] = ["Dynamic", "Calm", "Urgent", "Cheerful"];

/// Activity levels selectable for desktop, push, and thread notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyLevel {
    /// Notify for every message.
    All,
    /// Notify for mentions and direct messages only.
    Mention,
    /// Never notify.
    None,
}

impl NotifyLevel {
    /// Wire value stored in the preference record.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mention => "mention",
            Self::None => "none",
        }
    }

    /// Parse a wire value. Unrecognized values select the mention level,
    /// matching how the radio group renders such records.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "none" => Self::None,
            _ => Self::Mention,
        }
    }
}

/// Availability states that still receive mobile push alerts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushStatus {
    /// Push regardless of availability.
    Online,
    /// Push when away or offline.
    Away,
    /// Push only when offline.
    Offline,
}

impl PushStatus {
    /// Wire value stored in the preference record.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }

    /// Parse a wire value. Unrecognized values select offline, matching the
    /// radio group's fallback position.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "online" => Self::Online,
            "away" => Self::Away,
            _ => Self::Offline,
        }
    }
}

/// Reply-thread notification levels, used when collapsed threads are off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentsLevel {
    /// Notify for reply threads the user started or participated in.
    Any,
    /// Notify only for threads the user started.
    Root,
    /// Mentions only.
    Never,
}

impl CommentsLevel {
    /// Wire value stored in the preference record.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Root => "root",
            Self::Never => "never",
        }
    }

    /// Parse a wire value. Unrecognized values select the participate level,
    /// matching the radio group's fallback position.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "never" => Self::Never,
            "root" => Self::Root,
            _ => Self::Any,
        }
    }
}

/// Expandable sections of the notifications panel; at most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    /// All sections collapsed.
    #[default]
    None,
    /// Desktop notification rules and sounds.
    Desktop,
    /// Email notification switch.
    Email,
    /// Mobile push rules.
    Push,
    /// Mention keywords.
    Keywords,
    /// Reply-thread notification level.
    Comments,
    /// Out-of-office auto responder.
    AutoResponder,
}

/// Editable snapshot of the user's notification preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationsFormState {
    /// Desktop notification activity level.
    pub desktop: NotifyLevel,
    /// Desktop activity level for followed threads.
    pub desktop_threads: NotifyLevel,
    /// Whether desktop notifications play a sound.
    pub desktop_sound: bool,
    /// Selected desktop notification sound.
    pub desktop_notification_sound: String,
    /// Whether incoming calls ring on desktop.
    pub calls_desktop_sound: bool,
    /// Selected ring sound for incoming calls.
    pub calls_notification_sound: String,
    /// Whether email notifications are sent immediately.
    pub email: bool,
    /// Email activity level for followed threads.
    pub email_threads: NotifyLevel,
    /// Mobile push activity level.
    pub push: NotifyLevel,
    /// Push activity level for followed threads.
    pub push_threads: NotifyLevel,
    /// Availability states that allow push delivery.
    pub push_status: PushStatus,
    /// Reply-thread notification level.
    pub comments: CommentsLevel,
    /// Whether the bare username is an active mention keyword.
    pub username_key: bool,
    /// Whether the first name triggers mentions.
    pub first_name_key: bool,
    /// Whether channel-wide mentions trigger.
    pub channel_key: bool,
    /// Custom mention keywords, comma separated.
    pub custom_keys: String,
    /// Whether the custom keyword list participates in submission.
    pub custom_keys_checked: bool,
    /// Whether the out-of-office auto responder is on.
    pub auto_responder_active: bool,
    /// Auto responder reply text.
    pub auto_responder_message: String,
    /// A submit round-trip is in flight.
    pub is_saving: bool,
    /// Message from the last rejected submit, shown inline.
    pub server_error: Option<String>,
}

impl NotificationsFormState {
    /// Derive editable state from the user's stored record.
    ///
    /// `default_auto_responder` is the localized out-of-office fallback used
    /// when the record carries no message. Empty record values count as
    /// absent, the way the server treats them.
    #[must_use]
    pub fn derive(user: &UserProfile, default_auto_responder: &str) -> Self {
        let props = user.notify_props.clone().unwrap_or_default();
        let mentions = parse_mention_keys(non_empty(props.mention_keys.as_deref()), &user.username);
        let custom_keys_checked = !mentions.custom_keys.is_empty();
        Self {
            desktop: non_empty(props.desktop.as_deref())
                .map_or(NotifyLevel::Mention, NotifyLevel::from_value),
            desktop_threads: non_empty(props.desktop_threads.as_deref())
                .map_or(NotifyLevel::All, NotifyLevel::from_value),
            desktop_sound: non_empty(props.desktop_sound.as_deref()).is_none_or(flag_is_true),
            desktop_notification_sound: non_empty(props.desktop_notification_sound.as_deref())
                .map_or_else(|| "Bing".to_string(), ToString::to_string),
            calls_desktop_sound: non_empty(props.calls_desktop_sound.as_deref())
                .is_none_or(flag_is_true),
            calls_notification_sound: non_empty(props.calls_notification_sound.as_deref())
                .map_or_else(|| "Dynamic".to_string(), ToString::to_string),
            email: non_empty(props.email.as_deref()).is_none_or(flag_is_true),
            email_threads: non_empty(props.email_threads.as_deref())
                .map_or(NotifyLevel::All, NotifyLevel::from_value),
            push: non_empty(props.push.as_deref())
                .map_or(NotifyLevel::Mention, NotifyLevel::from_value),
            push_threads: non_empty(props.push_threads.as_deref())
                .map_or(NotifyLevel::All, NotifyLevel::from_value),
            push_status: non_empty(props.push_status.as_deref())
                .map_or(PushStatus::Away, PushStatus::from_value),
            comments: non_empty(props.comments.as_deref())
                .map_or(CommentsLevel::Never, CommentsLevel::from_value),
            username_key: mentions.username_key,
            first_name_key: non_empty(props.first_name.as_deref()).is_some_and(flag_is_true),
            channel_key: non_empty(props.channel.as_deref()).is_some_and(flag_is_true),
            custom_keys: mentions.custom_keys,
            custom_keys_checked,
            auto_responder_active: non_empty(props.auto_responder_active.as_deref())
                .is_some_and(flag_is_true),
            auto_responder_message: non_empty(props.auto_responder_message.as_deref())
                .map_or_else(|| default_auto_responder.to_string(), ToString::to_string),
            is_saving: false,
            server_error: None,
        }
    }

    /// Serialize the edited state back into a full preference record.
    ///
    /// Every field the form owns is written in the server's string encoding.
    /// A blank auto responder message falls back to the localized default so
    /// the server never stores an empty reply.
    #[must_use]
    pub fn serialize(&self, username: &str, default_auto_responder: &str) -> UserNotifyProps {
        let auto_responder_message = if self.auto_responder_message.trim().is_empty() {
            default_auto_responder.to_string()
        } else {
            self.auto_responder_message.clone()
        };
        UserNotifyProps {
            desktop: Some(self.desktop.as_value().to_string()),
            desktop_threads: Some(self.desktop_threads.as_value().to_string()),
            desktop_sound: Some(flag_from_bool(self.desktop_sound).to_string()),
            desktop_notification_sound: Some(self.desktop_notification_sound.clone()),
            calls_desktop_sound: Some(flag_from_bool(self.calls_desktop_sound).to_string()),
            calls_notification_sound: Some(self.calls_notification_sound.clone()),
            email: Some(flag_from_bool(self.email).to_string()),
            email_threads: Some(self.email_threads.as_value().to_string()),
            push: Some(self.push.as_value().to_string()),
            push_threads: Some(self.push_threads.as_value().to_string()),
            push_status: Some(self.push_status.as_value().to_string()),
            comments: Some(self.comments.as_value().to_string()),
            mention_keys: Some(build_mention_keys(
                username,
                self.username_key,
                &self.custom_keys,
                self.custom_keys_checked,
            )),
            first_name: Some(flag_from_bool(self.first_name_key).to_string()),
            channel: Some(flag_from_bool(self.channel_key).to_string()),
            auto_responder_active: Some(flag_from_bool(self.auto_responder_active).to_string()),
            auto_responder_message: Some(auto_responder_message),
        }
    }

    /// Mark a submit round-trip as in flight, clearing the previous error.
    pub fn start_saving(&mut self) {
        self.is_saving = true;
        self.server_error = None;
    }

    /// Record a rejected submit. The message stays until the next attempt.
    pub fn fail_saving(&mut self, message: String) {
        self.is_saving = false;
        self.server_error = Some(message);
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_REPLY: &str = "Hello, I am out of office and unable to respond to messages.";

    fn bare_user() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            ..UserProfile::default()
        }
    }

    fn user_with(props: UserNotifyProps) -> UserProfile {
        UserProfile {
            notify_props: Some(props),
            ..bare_user()
        }
    }

    #[test]
    fn derive_fills_documented_defaults() {
        let state = NotificationsFormState::derive(&bare_user(), DEFAULT_REPLY);
        assert_eq!(state.desktop, NotifyLevel::Mention);
        assert_eq!(state.desktop_threads, NotifyLevel::All);
        assert!(state.desktop_sound);
        assert_eq!(state.desktop_notification_sound, "Bing");
        assert!(state.calls_desktop_sound);
        assert_eq!(state.calls_notification_sound, "Dynamic");
        assert!(state.email);
        assert_eq!(state.email_threads, NotifyLevel::All);
        assert_eq!(state.push, NotifyLevel::Mention);
        assert_eq!(state.push_threads, NotifyLevel::All);
        assert_eq!(state.push_status, PushStatus::Away);
        assert_eq!(state.comments, CommentsLevel::Never);
        assert!(!state.username_key);
        assert!(!state.first_name_key);
        assert!(!state.channel_key);
        assert!(state.custom_keys.is_empty());
        assert!(!state.custom_keys_checked);
        assert!(!state.auto_responder_active);
        assert_eq!(state.auto_responder_message, DEFAULT_REPLY);
        assert!(!state.is_saving);
        assert!(state.server_error.is_none());
    }

    #[test]
    fn derive_reads_stored_values() {
        let user = user_with(UserNotifyProps {
            desktop: Some("all".to_string()),
            desktop_sound: Some("false".to_string()),
            email: Some("false".to_string()),
            push: Some("none".to_string()),
            push_status: Some("online".to_string()),
            comments: Some("root".to_string()),
            mention_keys: Some("alice,@alice,urgent".to_string()),
            first_name: Some("true".to_string()),
            auto_responder_active: Some("true".to_string()),
            auto_responder_message: Some("Gone fishing.".to_string()),
            ..UserNotifyProps::default()
        });
        let state = NotificationsFormState::derive(&user, DEFAULT_REPLY);
        assert_eq!(state.desktop, NotifyLevel::All);
        assert!(!state.desktop_sound);
        assert!(!state.email);
        assert_eq!(state.push, NotifyLevel::None);
        assert_eq!(state.push_status, PushStatus::Online);
        assert_eq!(state.comments, CommentsLevel::Root);
        assert!(state.username_key);
        assert_eq!(state.custom_keys, "urgent");
        assert!(state.custom_keys_checked);
        assert!(state.first_name_key);
        assert!(state.auto_responder_active);
        assert_eq!(state.auto_responder_message, "Gone fishing.");
    }

    #[test]
    fn derive_treats_empty_values_as_absent() {
        let user = user_with(UserNotifyProps {
            desktop_sound: Some(String::new()),
            desktop_notification_sound: Some(String::new()),
            mention_keys: Some(String::new()),
            ..UserNotifyProps::default()
        });
        let state = NotificationsFormState::derive(&user, DEFAULT_REPLY);
        assert!(state.desktop_sound);
        assert_eq!(state.desktop_notification_sound, "Bing");
        assert!(!state.username_key);
    }

    #[test]
    fn derive_collapses_unknown_values_like_the_radio_groups() {
        let user = user_with(UserNotifyProps {
            desktop: Some("sometimes".to_string()),
            push_status: Some("dnd".to_string()),
            comments: Some("garbage".to_string()),
            ..UserNotifyProps::default()
        });
        let state = NotificationsFormState::derive(&user, DEFAULT_REPLY);
        assert_eq!(state.desktop, NotifyLevel::Mention);
        assert_eq!(state.push_status, PushStatus::Offline);
        assert_eq!(state.comments, CommentsLevel::Any);
    }

    #[test]
    fn serialize_writes_the_legacy_string_encoding() {
        let mut state = NotificationsFormState::derive(&bare_user(), DEFAULT_REPLY);
        state.desktop = NotifyLevel::All;
        state.desktop_sound = false;
        state.email = false;
        state.username_key = true;
        state.custom_keys = "urgent,alerts".to_string();
        state.custom_keys_checked = true;
        let props = state.serialize("alice", DEFAULT_REPLY);
        assert_eq!(props.desktop.as_deref(), Some("all"));
        assert_eq!(props.desktop_sound.as_deref(), Some("false"));
        assert_eq!(props.email.as_deref(), Some("false"));
        assert_eq!(props.mention_keys.as_deref(), Some("alice,urgent,alerts"));
        assert_eq!(props.first_name.as_deref(), Some("false"));
        assert_eq!(props.auto_responder_active.as_deref(), Some("false"));
        // Untouched fields still serialize with their derived defaults.
        assert_eq!(props.push.as_deref(), Some("mention"));
        assert_eq!(props.push_status.as_deref(), Some("away"));
        assert_eq!(props.comments.as_deref(), Some("never"));
    }

    #[test]
    fn serialize_replaces_blank_auto_responder_message() {
        let mut state = NotificationsFormState::derive(&bare_user(), DEFAULT_REPLY);
        state.auto_responder_message = "   ".to_string();
        let props = state.serialize("alice", DEFAULT_REPLY);
        assert_eq!(props.auto_responder_message.as_deref(), Some(DEFAULT_REPLY));
    }

    #[test]
    fn serialize_then_derive_round_trips_canonical_state() {
        let user = user_with(UserNotifyProps {
            desktop: Some("all".to_string()),
            desktop_threads: Some("mention".to_string()),
            desktop_sound: Some("false".to_string()),
            desktop_notification_sound: Some("Ripple".to_string()),
            calls_desktop_sound: Some("false".to_string()),
            calls_notification_sound: Some("Urgent".to_string()),
            email: Some("false".to_string()),
            email_threads: Some("mention".to_string()),
            push: Some("all".to_string()),
            push_threads: Some("none".to_string()),
            push_status: Some("online".to_string()),
            comments: Some("any".to_string()),
            mention_keys: Some("alice,urgent".to_string()),
            first_name: Some("true".to_string()),
            channel: Some("true".to_string()),
            auto_responder_active: Some("true".to_string()),
            auto_responder_message: Some("Back next week.".to_string()),
        });
        let state = NotificationsFormState::derive(&user, DEFAULT_REPLY);
        // The stale thread level survives even though the checkbox renders
        // anything but `all` as unchecked.
        assert_eq!(state.push_threads, NotifyLevel::None);

        let round_tripped = NotificationsFormState::derive(
            &UserProfile {
                notify_props: Some(state.serialize("alice", DEFAULT_REPLY)),
                ..bare_user()
            },
            DEFAULT_REPLY,
        );
        assert_eq!(round_tripped, state);
    }

    #[test]
    fn saving_lifecycle_tracks_errors() {
        let mut state = NotificationsFormState::derive(&bare_user(), DEFAULT_REPLY);
        state.start_saving();
        assert!(state.is_saving);
        state.fail_saving("mention keys too long".to_string());
        assert!(!state.is_saving);
        assert_eq!(state.server_error.as_deref(), Some("mention keys too long"));
        // The next attempt clears the stale message.
        state.start_saving();
        assert!(state.server_error.is_none());
    }
}
