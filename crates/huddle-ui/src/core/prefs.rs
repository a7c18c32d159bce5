//! Lookups over the user's server-side preference entries.
//!
//! # Design
//! - Preferences stay in the flat `(category, name, value)` shape the server
//!   returns; helpers interpret them instead of reshaping them.
//! - Feature gates that mix server config with a preference (collapsed reply
//!   threads) live here so every caller resolves them the same way.

use huddle_api_models::{
    CATEGORY_DISPLAY_SETTINGS, CATEGORY_FLAGGED_POST, ClientConfig, PREF_COLLAPSED_REPLY_THREADS,
    Preference, flag_from_bool, flag_is_true,
};

/// Find a preference value by `(category, name)`.
#[must_use]
pub fn find<'a>(entries: &'a [Preference], category: &str, name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.category == category && entry.name == name)
        .map(|entry| entry.value.as_str())
}

/// Insert or replace the entry matching `(category, name)`.
pub fn upsert(entries: &mut Vec<Preference>, pref: Preference) {
    if let Some(existing) = entries
        .iter_mut()
        .find(|entry| entry.category == pref.category && entry.name == pref.name)
    {
        *existing = pref;
    } else {
        entries.push(pref);
    }
}

/// Remove the entry matching `(category, name)`, if present.
pub fn remove(entries: &mut Vec<Preference>, category: &str, name: &str) {
    entries.retain(|entry| !(entry.category == category && entry.name == name));
}

/// Whether the post with `post_id` is saved (flagged) by the user.
#[must_use]
pub fn is_post_saved(entries: &[Preference], post_id: &str) -> bool {
    find(entries, CATEGORY_FLAGGED_POST, post_id).is_some_and(flag_is_true)
}

/// Build the flagged-post entry submitted when a post is saved.
#[must_use]
pub fn saved_post_entry(user_id: &str, post_id: &str) -> Preference {
    Preference {
        user_id: user_id.to_string(),
        category: CATEGORY_FLAGGED_POST.to_string(),
        name: post_id.to_string(),
        value: flag_from_bool(true).to_string(),
    }
}

/// Server-side rollout stage for collapsed reply threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollapsedThreadsStage {
    /// Feature is off for everyone.
    Disabled,
    /// Users may opt in; off unless their preference says `on`.
    DefaultOff,
    /// Users may opt out; on unless their preference says `off`.
    DefaultOn,
    /// Feature is on for everyone and the preference is ignored.
    AlwaysOn,
}

impl CollapsedThreadsStage {
    /// Parse the `CollapsedThreads` config value; unknown values read as opt-in.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "disabled" => Self::Disabled,
            "default_on" => Self::DefaultOn,
            "always_on" => Self::AlwaysOn,
            _ => Self::DefaultOff,
        }
    }
}

/// Resolve whether collapsed reply threads are active for the current user.
///
/// The server config decides the rollout stage; within the opt-in/opt-out
/// stages the `display_settings/collapsed_reply_threads` preference wins.
#[must_use]
pub fn collapsed_threads_enabled(config: &ClientConfig, entries: &[Preference]) -> bool {
    match CollapsedThreadsStage::from_value(&config.collapsed_threads) {
        CollapsedThreadsStage::Disabled => false,
        CollapsedThreadsStage::AlwaysOn => true,
        stage => find(entries, CATEGORY_DISPLAY_SETTINGS, PREF_COLLAPSED_REPLY_THREADS)
            .map_or(stage == CollapsedThreadsStage::DefaultOn, |value| {
                value == "on"
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, name: &str, value: &str) -> Preference {
        Preference {
            user_id: "u1".to_string(),
            category: category.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn config(collapsed: &str) -> ClientConfig {
        ClientConfig {
            collapsed_threads: collapsed.to_string(),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn find_matches_category_and_name() {
        let entries = vec![
            entry("display_settings", "collapsed_reply_threads", "on"),
            entry("flagged_post", "p1", "true"),
        ];
        assert_eq!(
            find(&entries, "display_settings", "collapsed_reply_threads"),
            Some("on")
        );
        assert_eq!(find(&entries, "display_settings", "p1"), None);
    }

    #[test]
    fn upsert_replaces_existing_entry() {
        let mut entries = vec![entry("flagged_post", "p1", "true")];
        upsert(&mut entries, entry("flagged_post", "p1", "false"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "false");

        upsert(&mut entries, entry("flagged_post", "p2", "true"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn saved_posts_require_a_true_flag() {
        let entries = vec![
            entry("flagged_post", "saved", "true"),
            entry("flagged_post", "stale", "false"),
        ];
        assert!(is_post_saved(&entries, "saved"));
        assert!(!is_post_saved(&entries, "stale"));
        assert!(!is_post_saved(&entries, "missing"));
    }

    #[test]
    fn collapsed_threads_follow_config_stage_and_preference() {
        let opt_in = entry("display_settings", "collapsed_reply_threads", "on");
        let opt_out = entry("display_settings", "collapsed_reply_threads", "off");

        assert!(!collapsed_threads_enabled(&config("disabled"), &[
            opt_in.clone()
        ]));
        assert!(collapsed_threads_enabled(&config("always_on"), &[
            opt_out.clone()
        ]));

        assert!(!collapsed_threads_enabled(&config("default_off"), &[]));
        assert!(collapsed_threads_enabled(&config("default_off"), &[
            opt_in.clone()
        ]));

        assert!(collapsed_threads_enabled(&config("default_on"), &[]));
        assert!(!collapsed_threads_enabled(&config("default_on"), &[opt_out]));

        // Unknown stages behave like opt-in.
        assert!(!collapsed_threads_enabled(&config("experimental"), &[]));
        assert!(collapsed_threads_enabled(&config("experimental"), &[opt_in]));
    }
}
