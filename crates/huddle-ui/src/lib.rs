#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Huddle web client.
//! This crate holds the Yew front-end entrypoint plus the preference
//! logic, shared store, and locale bundles behind it.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::prefs::collapsed_threads_enabled;
    use crate::i18n::{LocaleCode, TranslationBundle};
    use huddle_api_models::ClientConfig;

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nav.threads", "Threads"), "Fils");
        assert_eq!(bundle.text("nav.missing_key", "Default"), "Default");
    }

    #[test]
    fn collapsed_threads_defaults_off_without_config() {
        let config = ClientConfig::default();
        assert!(!collapsed_threads_enabled(&config, &[]));
    }
}
