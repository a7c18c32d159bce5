//! Application shell: sidebar navigation plus the routed content area.

use crate::app::Route;
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, PartialEq)]
pub(crate) struct NavLabels {
    pub threads: String,
    pub notifications: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub active: Route,
    pub locale_selector: Html,
    pub nav: NavLabels,
    /// Active team name shown under the brand, once known.
    #[prop_or_default]
    pub team_label: Option<String>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    let theme_label = match props.theme {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <aside class="sidebar">
                <div class="brand">
                    <strong>{bundle.text("shell.brand", "Huddle")}</strong>
                    {props.team_label.clone().map(|team| html! {
                        <span class="muted">{team}</span>
                    }).unwrap_or_default()}
                </div>
                <nav>
                    {nav_item(Route::Threads, &props.nav.threads, &props.active)}
                    {nav_item(Route::NotificationSettings, &props.nav.notifications, &props.active)}
                </nav>
                <div class="sidebar-footer">
                    <div class="theme-toggle">
                        <small>{bundle.text("shell.theme", "Theme")}</small>
                        <button class="ghost" onclick={on_toggle_theme}>{theme_label}</button>
                    </div>
                    <div class="locale-toggle">
                        <small>{bundle.text("shell.locale", "Locale")}</small>
                        {props.locale_selector.clone()}
                    </div>
                </div>
            </aside>
            <div class="main">
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!("nav-item", (*active == route).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
