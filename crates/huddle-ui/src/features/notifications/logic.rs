//! Mention keyword parsing and collapsed-section summaries.
//!
//! # Design
//! - The record's `mention_keys` string is the single source of truth; the
//!   username checkbox and custom keyword text are projections of it.
//! - Summaries render from form state so an edited section previews its own
//!   pending values.

use crate::features::notifications::state::{
    CommentsLevel, NotificationsFormState, NotifyLevel, PushStatus,
};
use crate::i18n::TranslationBundle;
use huddle_api_models::UserProfile;

/// Mention keyword state split out of the comma-separated record value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MentionKeys {
    /// Whether the bare username token was present.
    pub username_key: bool,
    /// Residual comma-separated custom keywords, order preserved.
    pub custom_keys: String,
}

/// Split a stored `mention_keys` value into the username flag and the
/// residual custom keywords.
///
/// The username match is case sensitive. At most one bare username token is
/// removed, plus one `@username` duplicate; everything else passes through
/// verbatim.
#[must_use]
pub fn parse_mention_keys(raw: Option<&str>, username: &str) -> MentionKeys {
    let Some(raw) = raw else {
        return MentionKeys::default();
    };
    let mut keys: Vec<&str> = raw.split(',').collect();
    let username_key = if let Some(pos) = keys.iter().position(|key| *key == username) {
        keys.remove(pos);
        let handle = format!("@{username}");
        if let Some(dup) = keys.iter().position(|key| *key == handle) {
            keys.remove(dup);
        }
        true
    } else {
        false
    };
    MentionKeys {
        username_key,
        custom_keys: keys.join(","),
    }
}

/// Join the edited keyword state back into the record's comma-separated
/// encoding. Unchecked custom keywords are dropped and no empty segments are
/// produced.
#[must_use]
pub fn build_mention_keys(
    username: &str,
    username_key: bool,
    custom_keys: &str,
    custom_enabled: bool,
) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if username_key {
        parts.push(username);
    }
    if custom_enabled && !custom_keys.is_empty() {
        parts.push(custom_keys);
    }
    parts.join(",")
}

/// Collapsed summary for the desktop section: activity level plus the sound
/// suffix, unless desktop notifications are off entirely.
#[must_use]
pub fn desktop_describe(bundle: &TranslationBundle, state: &NotificationsFormState) -> String {
    let activity = match state.desktop {
        NotifyLevel::All => bundle.text("notifications.desktop.all", "For all activity"),
        NotifyLevel::Mention => bundle.text(
            "notifications.desktop.mention",
            "Only for mentions and direct messages",
        ),
        NotifyLevel::None => return bundle.text("notifications.desktop.none", "Never"),
    };
    let sound = if state.desktop_sound {
        bundle.text_with("notifications.desktop.with_sound", "with sound \"{sound}\"", &[
            ("sound", &state.desktop_notification_sound),
        ])
    } else {
        bundle.text("notifications.desktop.without_sound", "without sound")
    };
    format!("{activity}, {sound}")
}

/// Collapsed summary for the email section.
#[must_use]
pub fn email_describe(bundle: &TranslationBundle, state: &NotificationsFormState) -> String {
    if state.email {
        bundle.text("notifications.email.immediately", "Immediately")
    } else {
        bundle.text("notifications.email.never", "Never")
    }
}

/// Collapsed summary for the push section.
///
/// The activity level pairs with the availability trigger, except that
/// `never` stands alone and a mention-level selection on a server without
/// push delivery reads as disabled.
#[must_use]
pub fn push_describe(
    bundle: &TranslationBundle,
    state: &NotificationsFormState,
    push_enabled: bool,
) -> String {
    match state.push {
        NotifyLevel::All => match state.push_status {
            PushStatus::Away => bundle.text(
                "notifications.push.all_away",
                "For all activity when away or offline",
            ),
            PushStatus::Offline => bundle.text(
                "notifications.push.all_offline",
                "For all activity when offline",
            ),
            PushStatus::Online => bundle.text(
                "notifications.push.all_online",
                "For all activity when online, away or offline",
            ),
        },
        NotifyLevel::None => bundle.text("notifications.push.none", "Never"),
        NotifyLevel::Mention if push_enabled => match state.push_status {
            PushStatus::Away => bundle.text(
                "notifications.push.mention_away",
                "For mentions and direct messages when away or offline",
            ),
            PushStatus::Offline => bundle.text(
                "notifications.push.mention_offline",
                "For mentions and direct messages when offline",
            ),
            PushStatus::Online => bundle.text(
                "notifications.push.mention_online",
                "For mentions and direct messages when online, away or offline",
            ),
        },
        NotifyLevel::Mention => {
            bundle.text("notifications.push.disabled", "Push notifications are not enabled")
        }
    }
}

/// Collapsed summary for the keywords section: every active key, quoted and
/// comma-joined. The `@username` handle always leads because the server
/// matches it unconditionally.
#[must_use]
pub fn keywords_describe(user: &UserProfile, state: &NotificationsFormState) -> String {
    let mut keys: Vec<String> = vec![format!("@{}", user.username)];
    if state.first_name_key {
        keys.push(user.first_name.clone());
    }
    if state.username_key {
        keys.push(user.username.clone());
    }
    if state.channel_key {
        keys.push("@channel".to_string());
        keys.push("@all".to_string());
        keys.push("@here".to_string());
    }
    if !state.custom_keys.is_empty() {
        keys.extend(state.custom_keys.split(',').map(ToString::to_string));
    }
    keys.iter()
        .filter(|key| !key.trim().is_empty())
        .map(|key| format!("\"{key}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapsed summary for the reply-notifications section. Any value outside
/// `root`/`never` reads as the participate option, mirroring the radio group.
#[must_use]
pub fn comments_describe(bundle: &TranslationBundle, state: &NotificationsFormState) -> String {
    match state.comments {
        CommentsLevel::Never => bundle.text(
            "notifications.comments.never",
            "Do not trigger notifications on messages in reply threads unless I'm mentioned",
        ),
        CommentsLevel::Root => bundle.text(
            "notifications.comments.root",
            "Trigger notifications on messages in threads that I start",
        ),
        CommentsLevel::Any => bundle.text(
            "notifications.comments.any",
            "Trigger notifications on messages in reply threads that I start or participate in",
        ),
    }
}

/// Collapsed summary for the auto responder section.
#[must_use]
pub fn auto_responder_describe(
    bundle: &TranslationBundle,
    state: &NotificationsFormState,
) -> String {
    if state.auto_responder_active {
        bundle.text("notifications.auto_responder.enabled", "Enabled")
    } else {
        bundle.text("notifications.auto_responder.disabled", "Disabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    fn bundle() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::En)
    }

    fn state_from(user: &UserProfile) -> NotificationsFormState {
        NotificationsFormState::derive(user, "out of office")
    }

    fn user_with_keys(keys: &str) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            notify_props: Some(huddle_api_models::UserNotifyProps {
                mention_keys: Some(keys.to_string()),
                ..huddle_api_models::UserNotifyProps::default()
            }),
            ..UserProfile::default()
        }
    }

    #[test]
    fn parse_splits_username_from_custom_keys() {
        let parsed = parse_mention_keys(Some("alice,@alice,urgent"), "alice");
        assert!(parsed.username_key);
        assert_eq!(parsed.custom_keys, "urgent");
    }

    #[test]
    fn parse_username_match_is_case_sensitive() {
        let parsed = parse_mention_keys(Some("Alice,urgent"), "alice");
        assert!(!parsed.username_key);
        assert_eq!(parsed.custom_keys, "Alice,urgent");
    }

    #[test]
    fn parse_removes_one_bare_username_token() {
        let parsed = parse_mention_keys(Some("alice,alice"), "alice");
        assert!(parsed.username_key);
        assert_eq!(parsed.custom_keys, "alice");
    }

    #[test]
    fn parse_missing_record_value_means_no_keys() {
        let parsed = parse_mention_keys(None, "alice");
        assert!(!parsed.username_key);
        assert!(parsed.custom_keys.is_empty());
    }

    #[test]
    fn build_joins_without_empty_segments() {
        assert_eq!(build_mention_keys("alice", true, "urgent,alerts", true), "alice,urgent,alerts");
        assert_eq!(build_mention_keys("alice", false, "urgent", true), "urgent");
        assert_eq!(build_mention_keys("alice", true, "", true), "alice");
        assert_eq!(build_mention_keys("alice", false, "", false), "");
    }

    #[test]
    fn build_drops_unchecked_custom_keys() {
        assert_eq!(build_mention_keys("alice", true, "urgent", false), "alice");
    }

    #[test]
    fn push_describe_pairs_activity_with_status() {
        let user = user_with_keys("");
        let mut state = state_from(&user);

        state.push = NotifyLevel::All;
        state.push_status = PushStatus::Away;
        assert_eq!(
            push_describe(&bundle(), &state, true),
            "For all activity when away or offline"
        );

        state.push = NotifyLevel::None;
        assert_eq!(push_describe(&bundle(), &state, true), "Never");

        state.push = NotifyLevel::Mention;
        state.push_status = PushStatus::Online;
        assert_eq!(
            push_describe(&bundle(), &state, true),
            "For mentions and direct messages when online, away or offline"
        );
    }

    #[test]
    fn push_describe_mentions_respect_admin_gate() {
        let user = user_with_keys("");
        let mut state = state_from(&user);
        state.push = NotifyLevel::Mention;
        assert_eq!(
            push_describe(&bundle(), &state, false),
            "Push notifications are not enabled"
        );
        // The all-activity summary ignores the gate, as the settings page always has.
        state.push = NotifyLevel::All;
        state.push_status = PushStatus::Offline;
        assert_eq!(
            push_describe(&bundle(), &state, false),
            "For all activity when offline"
        );
    }

    #[test]
    fn keywords_describe_quotes_and_orders_keys() {
        let user = user_with_keys("alice,urgent,alerts");
        let mut state = state_from(&user);
        state.first_name_key = true;
        state.channel_key = true;
        assert_eq!(
            keywords_describe(&user, &state),
            "\"@alice\", \"Alice\", \"alice\", \"@channel\", \"@all\", \"@here\", \"urgent\", \"alerts\""
        );
    }

    #[test]
    fn keywords_describe_always_includes_the_handle() {
        let user = user_with_keys("");
        let state = state_from(&user);
        assert_eq!(keywords_describe(&user, &state), "\"@alice\"");
    }

    #[test]
    fn desktop_describe_appends_sound_state() {
        let user = user_with_keys("");
        let mut state = state_from(&user);
        assert_eq!(
            desktop_describe(&bundle(), &state),
            "Only for mentions and direct messages, with sound \"Bing\""
        );
        state.desktop_sound = false;
        state.desktop = NotifyLevel::All;
        assert_eq!(
            desktop_describe(&bundle(), &state),
            "For all activity, without sound"
        );
        state.desktop = NotifyLevel::None;
        assert_eq!(desktop_describe(&bundle(), &state), "Never");
    }

    #[test]
    fn remaining_sections_describe_their_stored_choice() {
        let user = user_with_keys("");
        let mut state = state_from(&user);
        assert_eq!(email_describe(&bundle(), &state), "Immediately");
        state.email = false;
        assert_eq!(email_describe(&bundle(), &state), "Never");

        assert_eq!(
            comments_describe(&bundle(), &state),
            "Do not trigger notifications on messages in reply threads unless I'm mentioned"
        );
        state.comments = CommentsLevel::Root;
        assert_eq!(
            comments_describe(&bundle(), &state),
            "Trigger notifications on messages in threads that I start"
        );

        assert_eq!(auto_responder_describe(&bundle(), &state), "Disabled");
        state.auto_responder_active = true;
        assert_eq!(auto_responder_describe(&bundle(), &state), "Enabled");
    }
}
