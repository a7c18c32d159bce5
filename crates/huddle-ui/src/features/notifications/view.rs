//! Notification settings panel.
//!
//! # Design
//! - One section is editable at a time; expanding a section rebuilds the
//!   form from the stored profile so abandoned edits never leak.
//! - Saving patches the whole record and swaps in the profile the server
//!   returns; a rejection keeps the section open with the server message.
//! - Feature gates (collapsed threads, push, calls, auto responder) decide
//!   which sections and rows exist at render time.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::icons::IconChevronLeft;
use crate::components::atoms::{Checkbox, Radio, Select, TextInput, Textarea, Toggle};
use crate::components::setting_section::SettingSection;
use crate::core::prefs::collapsed_threads_enabled;
use crate::core::store::{AppStore, app_dispatch, set_session_user};
use crate::features::notifications::api::update_notify_props;
use crate::features::notifications::logic::{
    auto_responder_describe, comments_describe, desktop_describe, email_describe,
    keywords_describe, push_describe,
};
use crate::features::notifications::state::{
    ActiveSection, CALL_SOUNDS, CommentsLevel, DESKTOP_SOUNDS, NotificationsFormState, NotifyLevel,
    PushStatus,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use huddle_api_models::{UserProfile, flag_is_true};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

#[function_component(NotificationsPanel)]
pub(crate) fn notifications_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let dispatch = app_dispatch();

    let user = use_selector(|store: &AppStore| store.session.user.clone());
    let config = use_selector(|store: &AppStore| store.session.config.clone());
    let crt_enabled = *use_selector(|store: &AppStore| {
        collapsed_threads_enabled(&store.session.config, &store.session.preferences)
    });

    let default_auto_responder = bundle.text(
        "notifications.auto_responder.default",
        "Hello, I am out of office and unable to respond to messages.",
    );

    let form = {
        let user = user.clone();
        let default_auto_responder = default_auto_responder.clone();
        use_state(move || {
            user.as_ref()
                .as_ref()
                .map(|user| NotificationsFormState::derive(user, &default_auto_responder))
        })
    };
    let active = use_state(ActiveSection::default);

    // Rebuild the form whenever the stored profile changes, which covers
    // both the boot fetch landing and a successful save.
    {
        let form = form.clone();
        let default_auto_responder = default_auto_responder.clone();
        use_effect_with_deps(
            move |user: &Option<UserProfile>| {
                if let Some(user) = user {
                    form.set(Some(NotificationsFormState::derive(
                        user,
                        &default_auto_responder,
                    )));
                }
                || ()
            },
            (*user).clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="card">
                <p class="error-text">{"Missing API context."}</p>
            </div>
        };
    };
    let (Some(user), Some(state)) = ((*user).clone(), (*form).clone()) else {
        return html! {
            <p class="muted">{t("shell.loading", "Loading your workspace…")}</p>
        };
    };

    let on_expand = {
        let active = active.clone();
        let form = form.clone();
        let user = user.clone();
        let default_auto_responder = default_auto_responder.clone();
        Callback::from(move |section: ActiveSection| {
            form.set(Some(NotificationsFormState::derive(
                &user,
                &default_auto_responder,
            )));
            active.set(section);
        })
    };
    let on_cancel = {
        let on_expand = on_expand.clone();
        Callback::from(move |()| on_expand.emit(ActiveSection::None))
    };
    let on_save = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let form = form.clone();
        let active = active.clone();
        let username = user.username.clone();
        let default_auto_responder = default_auto_responder.clone();
        Callback::from(move |()| {
            let Some(mut state) = (*form).clone() else {
                return;
            };
            if state.is_saving {
                return;
            }
            let props = state.serialize(&username, &default_auto_responder);
            state.start_saving();
            form.set(Some(state.clone()));
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let form = form.clone();
            let active = active.clone();
            yew::platform::spawn_local(async move {
                match update_notify_props(&client, props).await {
                    Ok(profile) => {
                        active.set(ActiveSection::None);
                        dispatch.reduce_mut(|store| set_session_user(store, profile));
                    }
                    Err(err) => {
                        state.fail_saving(err.message);
                        form.set(Some(state));
                    }
                }
            });
        })
    };
    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Threads);
            }
        })
    };

    let edit_label = AttrValue::from(t("notifications.edit", "Edit"));
    let save_label = AttrValue::from(t("notifications.save", "Save"));
    let saving_label = AttrValue::from(t("notifications.saving", "Saving…"));
    let cancel_label = AttrValue::from(t("notifications.cancel", "Cancel"));

    let section = |target: ActiveSection,
                   title: String,
                   describe: String,
                   extra_info: Option<Html>,
                   body: Html| {
        html! {
            <SettingSection
                title={AttrValue::from(title)}
                describe={AttrValue::from(describe)}
                edit_label={edit_label.clone()}
                save_label={save_label.clone()}
                saving_label={saving_label.clone()}
                cancel_label={cancel_label.clone()}
                expanded={*active == target}
                saving={state.is_saving}
                error={state.server_error.clone()}
                extra_info={extra_info}
                on_expand={on_expand.reform(move |()| target)}
                on_save={on_save.clone()}
                on_cancel={on_cancel.clone()}>
                {body}
            </SettingSection>
        }
    };

    let desktop_body = {
        let on_level = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| {
                    state.desktop = NotifyLevel::from_value(&value);
                });
            })
        };
        let on_threads = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| {
                    state.desktop_threads = threads_level(checked);
                });
            })
        };
        let on_sound = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.desktop_sound = checked);
            })
        };
        let on_sound_choice = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| {
                    state.desktop_notification_sound = value.to_string();
                });
            })
        };
        let on_calls_sound = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.calls_desktop_sound = checked);
            })
        };
        let on_calls_choice = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| {
                    state.calls_notification_sound = value.to_string();
                });
            })
        };
        html! {
            <>
                <div class="radio-list">
                    <Radio
                        name="desktop-activity"
                        value="all"
                        label={t("notifications.desktop.all", "For all activity")}
                        checked={state.desktop == NotifyLevel::All}
                        onchange={on_level.clone()}
                    />
                    <Radio
                        name="desktop-activity"
                        value="mention"
                        label={t("notifications.desktop.mention", "Only for mentions and direct messages")}
                        checked={state.desktop == NotifyLevel::Mention}
                        onchange={on_level.clone()}
                    />
                    <Radio
                        name="desktop-activity"
                        value="none"
                        label={t("notifications.desktop.none", "Never")}
                        checked={state.desktop == NotifyLevel::None}
                        onchange={on_level}
                    />
                </div>
                {(crt_enabled && state.desktop == NotifyLevel::Mention).then(|| html! {
                    <Checkbox
                        label={t("notifications.desktop.threads_all", "Notify me about replies to threads I'm following")}
                        checked={state.desktop_threads == NotifyLevel::All}
                        onchange={on_threads}
                    />
                }).unwrap_or_default()}
                {(state.desktop != NotifyLevel::None).then(|| html! {
                    <>
                        <Toggle
                            label={t("notifications.desktop.sound", "Notification sound")}
                            checked={state.desktop_sound}
                            onchange={on_sound}
                        />
                        {state.desktop_sound.then(|| html! {
                            <Select
                                options={sound_options(&DESKTOP_SOUNDS)}
                                value={Some(AttrValue::from(state.desktop_notification_sound.clone()))}
                                aria_label={t("notifications.desktop.sound", "Notification sound")}
                                onchange={on_sound_choice}
                            />
                        }).unwrap_or_default()}
                    </>
                }).unwrap_or_default()}
                {config.calls_ringing().then(|| html! {
                    <>
                        <Toggle
                            label={t("notifications.calls.sound", "Notification sound for incoming calls")}
                            checked={state.calls_desktop_sound}
                            onchange={on_calls_sound}
                        />
                        {state.calls_desktop_sound.then(|| html! {
                            <Select
                                options={sound_options(&CALL_SOUNDS)}
                                value={Some(AttrValue::from(state.calls_notification_sound.clone()))}
                                aria_label={t("notifications.calls.sound", "Notification sound for incoming calls")}
                                onchange={on_calls_choice}
                            />
                        }).unwrap_or_default()}
                    </>
                }).unwrap_or_default()}
            </>
        }
    };
    let desktop_info = (crt_enabled && state.desktop == NotifyLevel::Mention).then(|| {
        html! {
            {t(
                "notifications.desktop.threads_info",
                "When enabled, any reply to a thread you're following will send a desktop notification.",
            )}
        }
    });

    let email_body = {
        let on_email = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| state.email = flag_is_true(&value));
            })
        };
        let on_threads = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| {
                    state.email_threads = threads_level(checked);
                });
            })
        };
        html! {
            <>
                <div class="radio-list">
                    <Radio
                        name="email-activity"
                        value="true"
                        label={t("notifications.email.immediately", "Immediately")}
                        checked={state.email}
                        onchange={on_email.clone()}
                    />
                    <Radio
                        name="email-activity"
                        value="false"
                        label={t("notifications.email.never", "Never")}
                        checked={!state.email}
                        onchange={on_email}
                    />
                </div>
                {crt_enabled.then(|| html! {
                    <Checkbox
                        label={t("notifications.email.threads_all", "Notify me about replies to threads I'm following")}
                        checked={state.email_threads == NotifyLevel::All}
                        onchange={on_threads}
                    />
                }).unwrap_or_default()}
            </>
        }
    };
    let email_info = Some(html! {
        {t(
            "notifications.email.info",
            "Email notifications are sent for mentions and direct messages when you are offline or away for more than five minutes.",
        )}
    });

    let push_body = if config.push_enabled() {
        let on_level = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| {
                    state.push = NotifyLevel::from_value(&value);
                });
            })
        };
        let on_status = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| {
                    state.push_status = PushStatus::from_value(&value);
                });
            })
        };
        let on_threads = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| {
                    state.push_threads = threads_level(checked);
                });
            })
        };
        html! {
            <>
                <p class="muted">{t("notifications.push.send", "Send mobile push notifications")}</p>
                <div class="radio-list">
                    <Radio
                        name="push-activity"
                        value="all"
                        label={t("notifications.push.all", "For all activity")}
                        checked={state.push == NotifyLevel::All}
                        onchange={on_level.clone()}
                    />
                    <Radio
                        name="push-activity"
                        value="mention"
                        label={t("notifications.push.mention", "For mentions and direct messages")}
                        checked={state.push == NotifyLevel::Mention}
                        onchange={on_level.clone()}
                    />
                    <Radio
                        name="push-activity"
                        value="none"
                        label={t("notifications.push.none", "Never")}
                        checked={state.push == NotifyLevel::None}
                        onchange={on_level}
                    />
                </div>
                {(state.push != NotifyLevel::None).then(|| html! {
                    <>
                        <p class="muted">{t("notifications.push.status", "Trigger push notifications when")}</p>
                        <div class="radio-list">
                            <Radio
                                name="push-status"
                                value="online"
                                label={t("notifications.push.online", "Online, away or offline")}
                                checked={state.push_status == PushStatus::Online}
                                onchange={on_status.clone()}
                            />
                            <Radio
                                name="push-status"
                                value="away"
                                label={t("notifications.push.away", "Away or offline")}
                                checked={state.push_status == PushStatus::Away}
                                onchange={on_status.clone()}
                            />
                            <Radio
                                name="push-status"
                                value="offline"
                                label={t("notifications.push.offline", "Offline")}
                                checked={state.push_status == PushStatus::Offline}
                                onchange={on_status}
                            />
                        </div>
                    </>
                }).unwrap_or_default()}
                {(crt_enabled && state.push == NotifyLevel::Mention).then(|| html! {
                    <Checkbox
                        label={t("notifications.push.threads_all", "Notify me about replies to threads I'm following")}
                        checked={state.push_threads == NotifyLevel::All}
                        onchange={on_threads}
                    />
                }).unwrap_or_default()}
            </>
        }
    } else {
        html! {
            <p class="muted">
                {t(
                    "notifications.push.disabled_long",
                    "Push notifications have not been enabled by your system administrator.",
                )}
            </p>
        }
    };
    let push_info = config.push_enabled().then(|| {
        html! {
            {t(
                "notifications.push.info",
                "Notification alerts are pushed to your mobile device when there is activity in Huddle.",
            )}
        }
    });

    let keywords_body = {
        let on_first_name = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.first_name_key = checked);
            })
        };
        let on_username = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.username_key = checked);
            })
        };
        let on_channel = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.channel_key = checked);
            })
        };
        let on_custom_checked = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.custom_keys_checked = checked);
            })
        };
        let on_custom_keys = {
            let form = form.clone();
            Callback::from(move |value: String| {
                edit_form(&form, |state| {
                    state.custom_keys_checked = !value.is_empty();
                    state.custom_keys = value;
                });
            })
        };
        html! {
            <>
                {(!user.first_name.is_empty()).then(|| html! {
                    <Checkbox
                        label={bundle.text_with(
                            "notifications.keywords.first_name",
                            "Your case sensitive first name \"{first_name}\"",
                            &[("first_name", &user.first_name)],
                        )}
                        checked={state.first_name_key}
                        onchange={on_first_name}
                    />
                }).unwrap_or_default()}
                <Checkbox
                    label={bundle.text_with(
                        "notifications.keywords.username",
                        "Your non case sensitive username \"{username}\"",
                        &[("username", &user.username)],
                    )}
                    checked={state.username_key}
                    onchange={on_username}
                />
                <Checkbox
                    label={t("notifications.keywords.channel", "Channel-wide mentions \"@channel\", \"@all\", \"@here\"")}
                    checked={state.channel_key}
                    onchange={on_channel}
                />
                <Checkbox
                    label={t("notifications.keywords.custom", "Other non case sensitive words, separated by commas:")}
                    checked={state.custom_keys_checked}
                    onchange={on_custom_checked}
                />
                <TextInput
                    value={AttrValue::from(state.custom_keys.clone())}
                    aria_label={t("notifications.keywords.custom", "Other non case sensitive words, separated by commas:")}
                    oninput={on_custom_keys}
                />
            </>
        }
    };
    let keywords_info = Some(html! {
        {bundle.text_with(
            "notifications.keywords.info",
            "Notifications are triggered when someone sends a message that includes your username (\"@{username}\") or any of the words selected above.",
            &[("username", &user.username)],
        )}
    });

    let comments_body = {
        let on_comments = {
            let form = form.clone();
            Callback::from(move |value: AttrValue| {
                edit_form(&form, |state| {
                    state.comments = CommentsLevel::from_value(&value);
                });
            })
        };
        html! {
            <div class="radio-list">
                <Radio
                    name="comments-level"
                    value="any"
                    label={t("notifications.comments.any", "Trigger notifications on messages in reply threads that I start or participate in")}
                    checked={state.comments == CommentsLevel::Any}
                    onchange={on_comments.clone()}
                />
                <Radio
                    name="comments-level"
                    value="root"
                    label={t("notifications.comments.root", "Trigger notifications on messages in threads that I start")}
                    checked={state.comments == CommentsLevel::Root}
                    onchange={on_comments.clone()}
                />
                <Radio
                    name="comments-level"
                    value="never"
                    label={t("notifications.comments.never", "Do not trigger notifications on messages in reply threads unless I'm mentioned")}
                    checked={state.comments == CommentsLevel::Never}
                    onchange={on_comments}
                />
            </div>
        }
    };
    let comments_info = Some(html! {
        {t(
            "notifications.comments.info",
            "In addition to notifications for when you're mentioned, select if you would like to receive notifications on reply threads.",
        )}
    });

    let auto_responder_body = {
        let on_active = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                edit_form(&form, |state| state.auto_responder_active = checked);
            })
        };
        let on_message = {
            let form = form.clone();
            Callback::from(move |value: String| {
                edit_form(&form, |state| state.auto_responder_message = value);
            })
        };
        html! {
            <>
                <Toggle
                    label={t("notifications.auto_responder.activate", "Enabled (disables all other notifications)")}
                    checked={state.auto_responder_active}
                    onchange={on_active}
                />
                {state.auto_responder_active.then(|| html! {
                    <>
                        <p class="muted">{t("notifications.auto_responder.message", "Message")}</p>
                        <Textarea
                            value={AttrValue::from(state.auto_responder_message.clone())}
                            oninput={on_message}
                        />
                    </>
                }).unwrap_or_default()}
            </>
        }
    };
    let auto_responder_info = Some(html! {
        {t(
            "notifications.auto_responder.info",
            "Set a custom message that is sent automatically in response to direct messages, such as an out of office or vacation reply.",
        )}
    });

    html! {
        <div class="settings-panel">
            <header class="panel-header">
                <button
                    type="button"
                    class="ghost icon-button"
                    aria-label={t("icons.previous", "Previous Icon")}
                    onclick={on_back}>
                    <IconChevronLeft />
                </button>
                <h2>{t("notifications.title", "Notification Settings")}</h2>
            </header>
            <div class="stack">
                {section(
                    ActiveSection::Desktop,
                    t("notifications.desktop.title", "Desktop Notifications"),
                    desktop_describe(&bundle, &state),
                    desktop_info,
                    desktop_body,
                )}
                {section(
                    ActiveSection::Email,
                    t("notifications.email.title", "Email Notifications"),
                    email_describe(&bundle, &state),
                    email_info,
                    email_body,
                )}
                {section(
                    ActiveSection::Push,
                    t("notifications.push.title", "Mobile Push Notifications"),
                    push_describe(&bundle, &state, config.push_enabled()),
                    push_info,
                    push_body,
                )}
                {section(
                    ActiveSection::Keywords,
                    t("notifications.keywords.title", "Words That Trigger Mentions"),
                    keywords_describe(&user, &state),
                    keywords_info,
                    keywords_body,
                )}
                {(!crt_enabled).then(|| section(
                    ActiveSection::Comments,
                    t("notifications.comments.title", "Reply Notifications"),
                    comments_describe(&bundle, &state),
                    comments_info,
                    comments_body,
                )).unwrap_or_default()}
                {config.auto_responder_enabled().then(|| section(
                    ActiveSection::AutoResponder,
                    t("notifications.auto_responder.title", "Automatic Direct Message Replies"),
                    auto_responder_describe(&bundle, &state),
                    auto_responder_info,
                    auto_responder_body,
                )).unwrap_or_default()}
            </div>
        </div>
    }
}

/// Apply one edit to the live form snapshot, if the form is initialized.
fn edit_form(
    form: &UseStateHandle<Option<NotificationsFormState>>,
    mutate: impl FnOnce(&mut NotificationsFormState),
) {
    if let Some(mut state) = (**form).clone() {
        mutate(&mut state);
        form.set(Some(state));
    }
}

/// Checkbox position for the thread-reply fields, which store a level.
const fn threads_level(checked: bool) -> NotifyLevel {
    if checked {
        NotifyLevel::All
    } else {
        NotifyLevel::Mention
    }
}

fn sound_options(names: &[&'static str]) -> Vec<(AttrValue, AttrValue)> {
    names
        .iter()
        .map(|name| (AttrValue::from(*name), AttrValue::from(*name)))
        .collect()
}
