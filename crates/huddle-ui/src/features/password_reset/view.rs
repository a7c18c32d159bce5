//! Password-reset request view.
//!
//! # Design
//! - Validate locally before any network call; a server rejection message
//!   is shown verbatim in the same slot.
//! - On acceptance the form is replaced by a confirmation naming the
//!   address, so a double submit is impossible.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::atoms::TextInput;
use crate::components::atoms::icons::{IconCheck, IconChevronLeft};
use crate::features::password_reset::api::send_reset_link;
use crate::features::password_reset::state::{ResetRequestState, is_valid_email, normalize_email};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[function_component(PasswordResetPanel)]
pub(crate) fn password_reset_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let state = use_state(ResetRequestState::default);

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="card">
                <p class="error-text">{"Missing API context."}</p>
            </div>
        };
    };

    let invalid_email_text = bundle.text(
        "password_reset.invalid_email",
        "Please enter a valid email address.",
    );

    let on_input = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let on_submit = {
        let api_ctx = api_ctx.clone();
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |_| {
            let address = normalize_email(&email);
            if !is_valid_email(&address) {
                state.set(ResetRequestState::Editing {
                    error: Some(invalid_email_text.clone()),
                });
                return;
            }
            let client = api_ctx.client.clone();
            let state = state.clone();
            yew::platform::spawn_local(async move {
                match send_reset_link(&client, &address).await {
                    Ok(()) => state.set(ResetRequestState::Sent { email: address }),
                    Err(err) => state.set(ResetRequestState::Editing {
                        error: Some(err.message),
                    }),
                }
            });
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let body = match &*state {
        ResetRequestState::Sent { email } => html! {
            <div class="stack">
                <IconCheck class="success" />
                <p>
                    {bundle.text(
                        "password_reset.sent",
                        "If the account exists, a password reset email will be sent to:",
                    )}
                </p>
                <p><b>{email.clone()}</b></p>
                <p>{bundle.text("password_reset.check_inbox", "Please check your inbox.")}</p>
            </div>
        },
        ResetRequestState::Editing { error } => html! {
            <div class="stack">
                <p class="muted">
                    {bundle.text(
                        "password_reset.description",
                        "To reset your password, enter the email address you used to sign up",
                    )}
                </p>
                <TextInput
                    value={AttrValue::from((*email).clone())}
                    input_type="email"
                    placeholder={bundle.text("password_reset.email", "Email")}
                    aria_label={bundle.text("password_reset.email", "Email")}
                    oninput={on_input}
                />
                {error.clone().map(|message| html! {
                    <p class="error-text">{message}</p>
                }).unwrap_or_default()}
                <div class="actions">
                    <button type="button" class="solid" onclick={on_submit}>
                        {bundle.text("password_reset.submit", "Reset my password")}
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <div class="card reset-panel">
            <button type="button" class="ghost icon-button" onclick={on_back}>
                <IconChevronLeft title={bundle.text("icons.previous", "Previous Icon")} />
            </button>
            <h2>{bundle.text("password_reset.title", "Password Reset")}</h2>
            {body}
        </div>
    }
}
