//! Followed-threads page and per-row context menu.
//!
//! # Design
//! - Rows render from the store; the page fetch replaces them wholesale and
//!   menu effects patch follow state and read markers in place.
//! - A menu selection resolves to commands in plain state code; this view
//!   supplies the clock and permalink, runs the server calls in order, and
//!   applies the local effects of each one that succeeds.
//! - Copy feedback is per row and resets on a timer.

use crate::app::api::ApiCtx;
use crate::components::action_menu::{ActionMenuItem, render_action_menu};
use crate::core::prefs::{collapsed_threads_enabled, is_post_saved, saved_post_entry};
use crate::core::store::{AppStore, app_dispatch, remove_preference, upsert_preference};
use crate::features::threads::api::{ThreadIds, execute};
use crate::features::threads::state::{
    ThreadCommand, ThreadMenuContext, ThreadMenuEntry, has_unreads, mark_manually, menu_entries,
    permalink, resolve_entry, set_following, set_rows,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::clipboard;
use gloo::console;
use gloo_timers::callback::Timeout;
use huddle_api_models::{CATEGORY_FLAGGED_POST, UserThread};
use js_sys::Date;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ThreadsPage)]
pub(crate) fn threads_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = app_dispatch();

    let threads = use_selector(|store: &AppStore| store.threads.clone());
    let crt_enabled = *use_selector(|store: &AppStore| {
        collapsed_threads_enabled(&store.session.config, &store.session.preferences)
    });
    let session_ids = use_selector(|store: &AppStore| {
        (
            store.session.user.as_ref().map(|user| user.id.clone()),
            store.session.team.as_ref().map(|team| team.id.clone()),
        )
    });

    {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |ids: &(Option<String>, Option<String>)| {
                if let (Some(api_ctx), (Some(user_id), Some(team_id))) = (api_ctx, ids.clone()) {
                    let client = api_ctx.client.clone();
                    let dispatch = dispatch.clone();
                    yew::platform::spawn_local(async move {
                        match client.get_threads(&user_id, &team_id).await {
                            Ok(list) => dispatch.reduce_mut(|store| {
                                set_rows(&mut store.threads, list.threads);
                            }),
                            Err(err) => console::error!("thread fetch failed", err.to_string()),
                        }
                    });
                }
                || ()
            },
            (*session_ids).clone(),
        );
    }

    if api_ctx.is_none() {
        return html! {
            <div class="card">
                <p class="error-text">{"Missing API context."}</p>
            </div>
        };
    }

    let rows = threads.rows.clone();
    let body = if rows.is_empty() {
        html! { <p class="muted">{t("threads.empty", "No followed threads yet.")}</p> }
    } else {
        html! {
            <ul class="thread-list">
                {for rows.iter().map(|thread| {
                    let unread = has_unreads(&threads, thread);
                    html! {
                        <ThreadRow
                            key={thread.id.clone()}
                            thread={thread.clone()}
                            crt_enabled={crt_enabled}
                            unread={unread}
                        />
                    }
                })}
            </ul>
        }
    };

    html! {
        <div class="threads-page">
            <h2>{t("threads.title", "Followed Threads")}</h2>
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThreadRowProps {
    /// Thread backing this row.
    pub thread: UserThread,
    /// Whether collapsed reply threads are active for this user.
    pub crt_enabled: bool,
    /// Resolved unread state, manual markers already applied.
    pub unread: bool,
}

#[function_component(ThreadRow)]
pub(crate) fn thread_row(props: &ThreadRowProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = app_dispatch();
    let copied = use_state(|| false);
    let copy_timer = use_mut_ref(|| None as Option<Timeout>);

    let thread_id = props.thread.id.clone();
    let is_saved = *use_selector(move |store: &AppStore| {
        is_post_saved(&store.session.preferences, &thread_id)
    });
    let link_parts = use_selector(|store: &AppStore| {
        (
            store.session.config.site_url.clone(),
            store
                .session
                .team
                .as_ref()
                .map(|team| team.name.clone())
                .unwrap_or_default(),
            store
                .session
                .user
                .as_ref()
                .map(|user| user.id.clone())
                .unwrap_or_default(),
            store
                .session
                .team
                .as_ref()
                .map(|team| team.id.clone())
                .unwrap_or_default(),
        )
    });

    let Some(api_ctx) = api_ctx else {
        return html! {};
    };

    let ctx = ThreadMenuContext {
        crt_enabled: props.crt_enabled,
        is_following: props.thread.is_following,
        has_unreads: props.unread,
        is_saved,
    };

    let on_select = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let copied = copied.clone();
        let copy_timer = copy_timer.clone();
        let thread = props.thread.clone();
        let (site_url, team_name, user_id, team_id) = (*link_parts).clone();
        Callback::from(move |entry: ThreadMenuEntry| {
            let now = Date::now() as i64;
            let url = permalink(&site_url, &team_name, &thread.id);
            let commands = resolve_entry(entry, ctx, now, thread.last_reply_at, &url);
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let copied = copied.clone();
            let copy_timer = copy_timer.clone();
            let user_id = user_id.clone();
            let team_id = team_id.clone();
            let thread_id = thread.id.clone();
            yew::platform::spawn_local(async move {
                for command in commands {
                    let ids = ThreadIds {
                        user_id: &user_id,
                        team_id: &team_id,
                        thread_id: &thread_id,
                    };
                    if let Err(err) = execute(&client, ids, &command).await {
                        console::error!("thread action failed", err.to_string());
                        continue;
                    }
                    match command {
                        ThreadCommand::SetFollowing { following } => {
                            dispatch.reduce_mut(|store| {
                                set_following(&mut store.threads, &thread_id, following);
                            });
                        }
                        ThreadCommand::MarkManually { timestamp_ms } => {
                            dispatch.reduce_mut(|store| {
                                mark_manually(&mut store.threads, &thread_id, timestamp_ms);
                            });
                        }
                        ThreadCommand::SavePost => {
                            let entry = saved_post_entry(&user_id, &thread_id);
                            dispatch.reduce_mut(|store| upsert_preference(store, entry));
                        }
                        ThreadCommand::UnsavePost => {
                            dispatch.reduce_mut(|store| {
                                remove_preference(store, CATEGORY_FLAGGED_POST, &thread_id);
                            });
                        }
                        ThreadCommand::CopyLink { url } => {
                            if clipboard::copy_text(&url).await {
                                copied.set(true);
                                let copied = copied.clone();
                                *copy_timer.borrow_mut() = Some(Timeout::new(2000, move || {
                                    copied.set(false);
                                }));
                            }
                        }
                        ThreadCommand::OpenInChannel { url } => {
                            let _ = gloo::utils::window().location().set_href(&url);
                        }
                        ThreadCommand::UpdateRead { .. }
                        | ThreadCommand::MarkLastReplyUnread
                        | ThreadCommand::SetUnreadAtRoot => {}
                    }
                }
            });
        })
    };

    let items: Vec<ActionMenuItem> = menu_entries(ctx)
        .into_iter()
        .map(|entry| {
            let label = match entry {
                ThreadMenuEntry::Follow => t("threads.menu.follow", "Follow thread"),
                ThreadMenuEntry::Unfollow => t("threads.menu.unfollow", "Unfollow thread"),
                ThreadMenuEntry::OpenInChannel => t("threads.menu.open", "Open in channel"),
                ThreadMenuEntry::MarkRead => t("threads.menu.mark_read", "Mark as read"),
                ThreadMenuEntry::MarkUnread => t("threads.menu.mark_unread", "Mark as unread"),
                ThreadMenuEntry::Save => t("threads.menu.save", "Save"),
                ThreadMenuEntry::Unsave => t("threads.menu.unsave", "Unsave"),
                ThreadMenuEntry::CopyLink if *copied => t("threads.menu.copied", "Link copied"),
                ThreadMenuEntry::CopyLink => t("threads.menu.copy", "Copy link"),
            };
            let on_select = on_select.clone();
            ActionMenuItem::new(
                label,
                Callback::from(move |_| on_select.emit(entry)),
            )
        })
        .collect();

    let reply_count = props.thread.reply_count;
    html! {
        <li class={classes!("thread-row", props.unread.then_some("unread"))}>
            <div class="thread-summary">
                {props.unread.then(|| html! { <span class="dot" /> }).unwrap_or_default()}
                <p class="thread-message">{props.thread.post.message.clone()}</p>
                <p class="muted">
                    {format!("{reply_count} {}", t("threads.replies", "replies"))}
                </p>
            </div>
            {render_action_menu(t("threads.menu.label", "Thread options"), items)}
        </li>
    }
}
