//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared server state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.

use crate::core::prefs;
use crate::features::threads::state::ThreadsState;
use huddle_api_models::{ClientConfig, Preference, Team, UserProfile};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Current user, team, server config, and preference entries.
    pub session: SessionSlice,
    /// Followed-thread list state.
    pub threads: ThreadsState,
}

/// Server-sourced session data fetched once at boot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Authenticated user profile, absent until the boot fetch lands.
    pub user: Option<UserProfile>,
    /// Team scoping thread lookups and permalinks.
    pub team: Option<Team>,
    /// Server feature gates.
    pub config: ClientConfig,
    /// Flat preference entries owned by the user.
    pub preferences: Vec<Preference>,
    /// Set when the boot fetch failed and the shell should say so.
    pub load_failed: bool,
}

/// Store the authenticated profile after boot or a successful settings save.
pub fn set_session_user(store: &mut AppStore, user: UserProfile) {
    store.session.user = Some(user);
    store.session.load_failed = false;
}

/// Store the active team.
pub fn set_team(store: &mut AppStore, team: Team) {
    store.session.team = Some(team);
}

/// Store the server config snapshot.
pub fn set_client_config(store: &mut AppStore, config: ClientConfig) {
    store.session.config = config;
}

/// Replace the preference entries wholesale (boot fetch).
pub fn set_preferences(store: &mut AppStore, entries: Vec<Preference>) {
    store.session.preferences = entries;
}

/// Insert or replace a single preference entry after a server ack.
pub fn upsert_preference(store: &mut AppStore, entry: Preference) {
    prefs::upsert(&mut store.session.preferences, entry);
}

/// Drop a preference entry after a server-side delete.
pub fn remove_preference(store: &mut AppStore, category: &str, name: &str) {
    prefs::remove(&mut store.session.preferences, category, name);
}

/// Flag the session as unusable so the shell renders the failure notice.
pub fn mark_load_failed(store: &mut AppStore) {
    store.session.load_failed = true;
}

/// Dispatch handle for [`AppStore`].
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_has_no_session() {
        let store = AppStore::default();
        assert!(store.session.user.is_none());
        assert!(store.session.team.is_none());
        assert!(store.session.preferences.is_empty());
        assert!(!store.session.load_failed);
    }

    #[test]
    fn preference_reducers_keep_entries_unique() {
        let mut store = AppStore::default();
        let entry = Preference {
            user_id: "u1".to_string(),
            category: "flagged_post".to_string(),
            name: "p1".to_string(),
            value: "true".to_string(),
        };
        upsert_preference(&mut store, entry.clone());
        upsert_preference(&mut store, entry.clone());
        assert_eq!(store.session.preferences.len(), 1);

        remove_preference(&mut store, "flagged_post", "p1");
        assert!(store.session.preferences.is_empty());
    }

    #[test]
    fn session_user_resets_failure_flag() {
        let mut store = AppStore::default();
        mark_load_failed(&mut store);
        assert!(store.session.load_failed);
        set_session_user(&mut store, UserProfile {
            id: "u1".to_string(),
            username: "alice".to_string(),
            ..UserProfile::default()
        });
        assert!(!store.session.load_failed);
    }
}
