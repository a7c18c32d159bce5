//! App root: boot fetches, shell wiring, and routed views.
//!
//! # Design
//! - One boot effect hydrates the store with the profile, server config,
//!   preference entries, and team; views read it all through yewdux.
//! - Theme and locale are the only client-persisted settings; everything
//!   else round-trips through the server.
//! - The password reset route stays reachable when the boot fetch fails,
//!   since that is exactly when a user needs it.

use crate::app::api::ApiCtx;
use crate::components::atoms::Select;
use crate::components::shell::{AppShell, NavLabels};
use crate::core::store::{
    AppStore, mark_load_failed, set_client_config, set_preferences, set_session_user, set_team,
};
use crate::core::theme::ThemeMode;
use crate::features::notifications::view::NotificationsPanel;
use crate::features::password_reset::view::PasswordResetPanel;
use crate::features::threads::view::ThreadsPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::window;
use preferences::{api_base_url, load_locale, load_theme, persist_locale, persist_theme};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;
mod routes;

#[function_component(HuddleApp)]
pub fn huddle_app() -> Html {
    let theme = use_state(load_theme);
    let locale = use_state(load_locale);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }
    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                persist_locale(locale);
                || ()
            },
            locale,
        );
    }
    {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                let dispatch = dispatch.clone();
                yew::platform::spawn_local(async move {
                    match client.get_me().await {
                        Ok(user) => {
                            dispatch.reduce_mut(|store| set_session_user(store, user));
                            match client.get_client_config().await {
                                Ok(config) => {
                                    dispatch.reduce_mut(|store| set_client_config(store, config));
                                }
                                Err(err) => {
                                    console::error!("config fetch failed", err.to_string());
                                }
                            }
                            match client.get_preferences().await {
                                Ok(entries) => {
                                    dispatch.reduce_mut(|store| set_preferences(store, entries));
                                }
                                Err(err) => {
                                    console::error!("preference fetch failed", err.to_string());
                                }
                            }
                            match client.get_my_teams().await {
                                Ok(teams) => {
                                    if let Some(team) = teams.into_iter().next() {
                                        dispatch.reduce_mut(|store| set_team(store, team));
                                    }
                                }
                                Err(err) => {
                                    console::error!("team fetch failed", err.to_string());
                                }
                            }
                        }
                        Err(err) => {
                            console::error!("profile fetch failed", err.to_string());
                            dispatch.reduce_mut(mark_load_failed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    let nav_labels = {
        let bundle = (*bundle).clone();
        NavLabels {
            threads: bundle.text("nav.threads", "Threads"),
            notifications: bundle.text("nav.notifications", "Notifications"),
        }
    };

    let locale_selector = {
        let locale = locale.clone();
        let options: Vec<(AttrValue, AttrValue)> = LocaleCode::all()
            .iter()
            .map(|locale| (AttrValue::from(locale.code()), AttrValue::from(locale.label())))
            .collect();
        html! {
            <Select
                options={options}
                value={Some(AttrValue::from(locale.code()))}
                aria_label={bundle.text("shell.locale", "Language")}
                onchange={{
                    let locale = locale.clone();
                    Callback::from(move |code: AttrValue| {
                        if let Some(next) = LocaleCode::from_lang_tag(&code) {
                            locale.set(next);
                        }
                    })
                }}
            />
        }
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <AppFrame
                        theme={*theme}
                        on_toggle_theme={toggle_theme}
                        locale_selector={locale_selector}
                        nav={nav_labels}
                    />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct AppFrameProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub locale_selector: Html,
    pub nav: NavLabels,
}

/// Shell plus routed content. Lives inside the router so the active route
/// can drive the navigation state.
#[function_component(AppFrame)]
fn app_frame(props: &AppFrameProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let session_ready = use_selector(|store: &AppStore| store.session.user.is_some());
    let load_failed = use_selector(|store: &AppStore| store.session.load_failed);
    let team_label = use_selector(|store: &AppStore| {
        store
            .session
            .team
            .as_ref()
            .map(|team| team.display_name.clone())
    });
    let current_route = use_route::<Route>().unwrap_or(Route::Threads);

    let ready = *session_ready;
    let failed = *load_failed;
    let bundle_routes = bundle.clone();
    html! {
        <AppShell
            theme={props.theme}
            on_toggle_theme={props.on_toggle_theme.clone()}
            active={current_route}
            locale_selector={props.locale_selector.clone()}
            nav={props.nav.clone()}
            team_label={(*team_label).clone()}
        >
            <Switch<Route> render={move |route| {
                let bundle = bundle_routes.clone();
                match route {
                    Route::Home => html! { <Redirect<Route> to={Route::Threads} /> },
                    Route::ResetPassword => html! { <PasswordResetPanel /> },
                    Route::NotFound => html! {
                        <div class="placeholder">
                            <h2>{bundle.text("shell.not_found", "Page not found.")}</h2>
                        </div>
                    },
                    Route::Threads | Route::NotificationSettings if failed => html! {
                        <p class="error-text">
                            {bundle.text(
                                "shell.load_failed",
                                "Could not load your profile. Check your connection and refresh.",
                            )}
                        </p>
                    },
                    Route::Threads | Route::NotificationSettings if !ready => html! {
                        <p class="muted">{bundle.text("shell.loading", "Loading your workspace…")}</p>
                    },
                    Route::Threads => html! { <ThreadsPage /> },
                    Route::NotificationSettings => html! { <NotificationsPanel /> },
                }
            }} />
        </AppShell>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<HuddleApp>::with_root(root).render();
    } else {
        yew::Renderer::<HuddleApp>::new().render();
    }
}
