//! API helpers for the followed-threads feature.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for decoding and error handling.

use crate::core::prefs::saved_post_entry;
use crate::features::threads::state::ThreadCommand;
use crate::services::api::{ApiClient, ApiError};

/// Server-side ids addressing one thread for the current session.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ThreadIds<'a> {
    /// Authenticated user id.
    pub user_id: &'a str,
    /// Team scoping the thread routes.
    pub team_id: &'a str,
    /// Thread (root post) id.
    pub thread_id: &'a str,
}

/// Run the server-side effect of one resolved menu command.
///
/// Commands without a server side (manual markers, clipboard, navigation)
/// resolve immediately; the caller applies their local effects.
pub(crate) async fn execute(
    client: &ApiClient,
    ids: ThreadIds<'_>,
    command: &ThreadCommand,
) -> Result<(), ApiError> {
    match command {
        ThreadCommand::SetFollowing { following } => {
            client
                .set_thread_follow(ids.user_id, ids.team_id, ids.thread_id, *following)
                .await
        }
        ThreadCommand::UpdateRead { timestamp_ms } => {
            client
                .update_thread_read(ids.user_id, ids.team_id, ids.thread_id, *timestamp_ms)
                .await
        }
        ThreadCommand::MarkLastReplyUnread => {
            client
                .mark_thread_unread(ids.user_id, ids.team_id, ids.thread_id)
                .await
        }
        ThreadCommand::SetUnreadAtRoot => client.set_post_unread(ids.user_id, ids.thread_id).await,
        ThreadCommand::SavePost => {
            let entry = saved_post_entry(ids.user_id, ids.thread_id);
            client.save_preferences(ids.user_id, &[entry]).await
        }
        ThreadCommand::UnsavePost => {
            let entry = saved_post_entry(ids.user_id, ids.thread_id);
            client.delete_preferences(ids.user_id, &[entry]).await
        }
        ThreadCommand::MarkManually { .. }
        | ThreadCommand::CopyLink { .. }
        | ThreadCommand::OpenInChannel { .. } => Ok(()),
    }
}
