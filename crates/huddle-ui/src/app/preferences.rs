//! Persistence and environment helpers for the app shell.

use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

const THEME_KEY: &str = "huddle.theme";
const LOCALE_KEY: &str = "huddle.locale";

pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        if let Some(mode) = ThemeMode::from_value(&value) {
            return mode;
        }
    }
    ThemeMode::Light
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    set_storage(THEME_KEY, theme.as_str());
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// Base URL for the API client. The client ships from the same origin as
/// the server, so the page origin is authoritative.
pub(crate) fn api_base_url() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:8065".to_string())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
