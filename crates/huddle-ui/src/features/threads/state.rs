//! Followed-threads feature state.
//!
//! # Design
//! - The store slice mirrors the server listing plus local unread markers;
//!   rows stay in server order.
//! - Menu entries derive from a small context struct, and each selection
//!   resolves to explicit commands so the view stays declarative.
//! - Timestamps are passed in by the caller; nothing here reads the clock.

use huddle_api_models::UserThread;
use std::collections::HashMap;

/// Followed-thread state embedded in the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThreadsState {
    /// Threads in server order.
    pub rows: Vec<UserThread>,
    /// Manual read-state markers by thread id: the epoch-millisecond time
    /// the user last forced a read or unread state.
    pub manually_marked: HashMap<String, i64>,
}

/// Replace the thread rows after a listing fetch, dropping stale markers.
pub fn set_rows(state: &mut ThreadsState, rows: Vec<UserThread>) {
    state
        .manually_marked
        .retain(|id, _| rows.iter().any(|row| &row.id == id));
    state.rows = rows;
}

/// Update a row's follow flag after the server acknowledged the change.
pub fn set_following(state: &mut ThreadsState, thread_id: &str, following: bool) {
    if let Some(row) = state.rows.iter_mut().find(|row| row.id == thread_id) {
        row.is_following = following;
    }
}

/// Record a manual read-state marker for the thread.
pub fn mark_manually(state: &mut ThreadsState, thread_id: &str, timestamp_ms: i64) {
    state
        .manually_marked
        .insert(thread_id.to_string(), timestamp_ms);
}

/// Whether the thread shows as unread.
///
/// A manual marker overrides the server counter until the next listing
/// fetch: marking read stamps the current time (after the last reply), while
/// marking unread stamps the last reply itself.
#[must_use]
pub fn has_unreads(state: &ThreadsState, thread: &UserThread) -> bool {
    state
        .manually_marked
        .get(&thread.id)
        .map_or(thread.unread_replies > 0, |marker| {
            *marker <= thread.last_reply_at
        })
}

/// Inputs deciding which menu entries a thread offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadMenuContext {
    /// Collapsed reply threads are active for this user.
    pub crt_enabled: bool,
    /// The user follows the thread.
    pub is_following: bool,
    /// The thread currently shows as unread.
    pub has_unreads: bool,
    /// The root post is saved (flagged).
    pub is_saved: bool,
}

/// One entry of the thread context menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadMenuEntry {
    /// Start following the thread.
    Follow,
    /// Stop following the thread.
    Unfollow,
    /// Jump to the thread in its channel.
    OpenInChannel,
    /// Clear the unread state.
    MarkRead,
    /// Force the unread state.
    MarkUnread,
    /// Save (flag) the root post.
    Save,
    /// Remove the saved flag.
    Unsave,
    /// Copy the permalink.
    CopyLink,
}

/// Build the menu for a thread. Follow toggles only exist on collapsed
/// threads servers; the read toggle reflects the current unread state.
#[must_use]
pub fn menu_entries(ctx: ThreadMenuContext) -> Vec<ThreadMenuEntry> {
    let mut entries = Vec::with_capacity(5);
    if ctx.crt_enabled {
        entries.push(if ctx.is_following {
            ThreadMenuEntry::Unfollow
        } else {
            ThreadMenuEntry::Follow
        });
    }
    entries.push(ThreadMenuEntry::OpenInChannel);
    entries.push(if ctx.has_unreads {
        ThreadMenuEntry::MarkRead
    } else {
        ThreadMenuEntry::MarkUnread
    });
    entries.push(if ctx.is_saved {
        ThreadMenuEntry::Unsave
    } else {
        ThreadMenuEntry::Save
    });
    entries.push(ThreadMenuEntry::CopyLink);
    entries
}

/// Side effects a menu selection requests, in dispatch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThreadCommand {
    /// Set the server-side follow state.
    SetFollowing {
        /// New follow state.
        following: bool,
    },
    /// Mark the whole thread read as of `timestamp_ms`.
    UpdateRead {
        /// Read horizon, epoch milliseconds.
        timestamp_ms: i64,
    },
    /// Mark the last reply unread (collapsed threads servers).
    MarkLastReplyUnread,
    /// Remember a local manual read-state marker.
    MarkManually {
        /// Marker time, epoch milliseconds.
        timestamp_ms: i64,
    },
    /// Mark unread starting at the root post (legacy servers).
    SetUnreadAtRoot,
    /// Save (flag) the root post.
    SavePost,
    /// Remove the saved flag from the root post.
    UnsavePost,
    /// Copy the permalink to the clipboard.
    CopyLink {
        /// Absolute permalink URL.
        url: String,
    },
    /// Navigate to the thread in its channel.
    OpenInChannel {
        /// Absolute permalink URL.
        url: String,
    },
}

/// Resolve a selected entry into the commands to run.
///
/// `now_ms` stamps mark-read; `unread_timestamp_ms` is the last reply time
/// used when forcing unread. On legacy servers both read toggles collapse
/// into a root-post unread flip and no local marker is kept.
#[must_use]
pub fn resolve_entry(
    entry: ThreadMenuEntry,
    ctx: ThreadMenuContext,
    now_ms: i64,
    unread_timestamp_ms: i64,
    permalink: &str,
) -> Vec<ThreadCommand> {
    match entry {
        ThreadMenuEntry::Follow => vec![ThreadCommand::SetFollowing { following: true }],
        ThreadMenuEntry::Unfollow => vec![ThreadCommand::SetFollowing { following: false }],
        ThreadMenuEntry::OpenInChannel => vec![ThreadCommand::OpenInChannel {
            url: permalink.to_string(),
        }],
        ThreadMenuEntry::MarkRead if ctx.crt_enabled => vec![
            ThreadCommand::UpdateRead {
                timestamp_ms: now_ms,
            },
            ThreadCommand::MarkManually {
                timestamp_ms: now_ms,
            },
        ],
        ThreadMenuEntry::MarkUnread if ctx.crt_enabled => vec![
            ThreadCommand::MarkLastReplyUnread,
            ThreadCommand::MarkManually {
                timestamp_ms: unread_timestamp_ms,
            },
        ],
        ThreadMenuEntry::MarkRead | ThreadMenuEntry::MarkUnread => {
            vec![ThreadCommand::SetUnreadAtRoot]
        }
        ThreadMenuEntry::Save => vec![ThreadCommand::SavePost],
        ThreadMenuEntry::Unsave => vec![ThreadCommand::UnsavePost],
        ThreadMenuEntry::CopyLink => vec![ThreadCommand::CopyLink {
            url: permalink.to_string(),
        }],
    }
}

/// Permalink for the thread's root post: `{site}/{team}/pl/{id}`.
#[must_use]
pub fn permalink(site_url: &str, team_name: &str, thread_id: &str) -> String {
    format!(
        "{}/{}/pl/{}",
        site_url.trim_end_matches('/'),
        urlencoding::encode(team_name),
        urlencoding::encode(thread_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_api_models::ThreadPost;

    const THREAD_ID: &str = "1y8hpek81byspd4enyk9mp1ncw";
    const UNREAD_AT: i64 = 1_610_486_901_110;
    const NOW: i64 = 1_612_582_579_566;

    fn ctx() -> ThreadMenuContext {
        ThreadMenuContext {
            crt_enabled: true,
            is_following: false,
            has_unreads: false,
            is_saved: false,
        }
    }

    fn thread(id: &str, unread_replies: u64, last_reply_at: i64) -> UserThread {
        UserThread {
            id: id.to_string(),
            reply_count: 3,
            last_reply_at,
            unread_replies,
            unread_mentions: 0,
            is_following: true,
            post: ThreadPost {
                id: id.to_string(),
                user_id: "u2".to_string(),
                message: "root".to_string(),
            },
        }
    }

    #[test]
    fn menu_offers_follow_toggle_only_with_collapsed_threads() {
        let entries = menu_entries(ctx());
        assert_eq!(entries[0], ThreadMenuEntry::Follow);

        let entries = menu_entries(ThreadMenuContext {
            is_following: true,
            ..ctx()
        });
        assert_eq!(entries[0], ThreadMenuEntry::Unfollow);

        let entries = menu_entries(ThreadMenuContext {
            crt_enabled: false,
            ..ctx()
        });
        assert!(!entries.contains(&ThreadMenuEntry::Follow));
        assert!(!entries.contains(&ThreadMenuEntry::Unfollow));
    }

    #[test]
    fn menu_reflects_unread_and_saved_state() {
        let entries = menu_entries(ThreadMenuContext {
            has_unreads: true,
            is_saved: true,
            ..ctx()
        });
        assert_eq!(entries, vec![
            ThreadMenuEntry::Follow,
            ThreadMenuEntry::OpenInChannel,
            ThreadMenuEntry::MarkRead,
            ThreadMenuEntry::Unsave,
            ThreadMenuEntry::CopyLink,
        ]);

        let entries = menu_entries(ctx());
        assert!(entries.contains(&ThreadMenuEntry::MarkUnread));
        assert!(entries.contains(&ThreadMenuEntry::Save));
    }

    #[test]
    fn follow_resolves_to_server_follow_state() {
        assert_eq!(
            resolve_entry(ThreadMenuEntry::Follow, ctx(), NOW, UNREAD_AT, ""),
            vec![ThreadCommand::SetFollowing { following: true }]
        );
        assert_eq!(
            resolve_entry(ThreadMenuEntry::Unfollow, ctx(), NOW, UNREAD_AT, ""),
            vec![ThreadCommand::SetFollowing { following: false }]
        );
    }

    #[test]
    fn mark_read_updates_thread_and_keeps_a_marker() {
        let commands = resolve_entry(
            ThreadMenuEntry::MarkRead,
            ThreadMenuContext {
                has_unreads: true,
                ..ctx()
            },
            NOW,
            UNREAD_AT,
            "",
        );
        assert_eq!(commands, vec![
            ThreadCommand::UpdateRead { timestamp_ms: NOW },
            ThreadCommand::MarkManually { timestamp_ms: NOW },
        ]);
    }

    #[test]
    fn mark_unread_rewinds_to_the_last_reply() {
        let commands = resolve_entry(ThreadMenuEntry::MarkUnread, ctx(), NOW, UNREAD_AT, "");
        assert_eq!(commands, vec![
            ThreadCommand::MarkLastReplyUnread,
            ThreadCommand::MarkManually {
                timestamp_ms: UNREAD_AT
            },
        ]);
    }

    #[test]
    fn legacy_servers_flip_unread_at_the_root_post() {
        let legacy = ThreadMenuContext {
            crt_enabled: false,
            ..ctx()
        };
        assert_eq!(
            resolve_entry(ThreadMenuEntry::MarkUnread, legacy, NOW, UNREAD_AT, ""),
            vec![ThreadCommand::SetUnreadAtRoot]
        );
        assert_eq!(
            resolve_entry(ThreadMenuEntry::MarkRead, legacy, NOW, UNREAD_AT, ""),
            vec![ThreadCommand::SetUnreadAtRoot]
        );
    }

    #[test]
    fn save_toggle_resolves_to_flag_commands() {
        assert_eq!(
            resolve_entry(ThreadMenuEntry::Save, ctx(), NOW, UNREAD_AT, ""),
            vec![ThreadCommand::SavePost]
        );
        assert_eq!(
            resolve_entry(ThreadMenuEntry::Unsave, ctx(), NOW, UNREAD_AT, ""),
            vec![ThreadCommand::UnsavePost]
        );
    }

    #[test]
    fn copy_link_carries_the_permalink() {
        let url = permalink("http://localhost:8065", "team-name-1", THREAD_ID);
        assert_eq!(
            url,
            format!("http://localhost:8065/team-name-1/pl/{THREAD_ID}")
        );
        assert_eq!(
            resolve_entry(ThreadMenuEntry::CopyLink, ctx(), NOW, UNREAD_AT, &url),
            vec![ThreadCommand::CopyLink { url }]
        );
    }

    #[test]
    fn permalink_escapes_team_slugs() {
        assert_eq!(
            permalink("http://localhost:8065/", "team one", "p1"),
            "http://localhost:8065/team%20one/pl/p1"
        );
    }

    #[test]
    fn manual_markers_override_server_counters() {
        let mut state = ThreadsState::default();
        let row = thread(THREAD_ID, 2, UNREAD_AT);
        set_rows(&mut state, vec![row.clone()]);
        assert!(has_unreads(&state, &row));

        // Marking read stamps a time after the last reply.
        mark_manually(&mut state, THREAD_ID, NOW);
        assert!(!has_unreads(&state, &row));

        // Marking unread rewinds the marker to the last reply.
        mark_manually(&mut state, THREAD_ID, UNREAD_AT);
        assert!(has_unreads(&state, &row));
    }

    #[test]
    fn listing_refresh_drops_stale_markers() {
        let mut state = ThreadsState::default();
        set_rows(&mut state, vec![thread(THREAD_ID, 0, UNREAD_AT)]);
        mark_manually(&mut state, THREAD_ID, NOW);
        set_rows(&mut state, vec![thread("other", 0, UNREAD_AT)]);
        assert!(state.manually_marked.is_empty());
    }

    #[test]
    fn follow_flag_updates_matching_row() {
        let mut state = ThreadsState::default();
        set_rows(&mut state, vec![thread(THREAD_ID, 0, UNREAD_AT)]);
        set_following(&mut state, THREAD_ID, false);
        assert!(!state.rows[0].is_following);
        set_following(&mut state, "missing", true);
        assert!(!state.rows[0].is_following);
    }
}
