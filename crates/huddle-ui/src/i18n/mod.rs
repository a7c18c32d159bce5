//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes for the first release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// German.
    De,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 4] {
        [Self::De, Self::En, Self::Es, Self::Fr]
    }

    /// RFC 5646 string for the locale (two-letter codes for now).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Human-friendly label for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::De => "Deutsch",
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale, falling back to English.
    ///
    /// The bundle will gracefully degrade to English strings when a key is missing.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let raw = raw_locale(locale);
        let tree: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Resolve a dotted path and substitute `{name}` placeholders from `values`.
    ///
    /// Unknown placeholders are left verbatim so missing values stay visible.
    #[must_use]
    pub fn text_with(&self, path: &str, default: &str, values: &[(&str, &str)]) -> String {
        let mut out = self.text(path, default);
        for (name, value) in values {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }

    #[cfg(test)]
    #[must_use]
    /// Locale backing this bundle.
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::De => include_str!("../../i18n/de.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale(), locale);
            assert!(!bundle.text("nav.threads", "Threads").is_empty());
        }
    }

    #[test]
    fn placeholders_are_substituted() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let text = bundle.text_with(
            "notifications.keywords.username",
            "Your non case sensitive username \"{username}\"",
            &[("username", "quinn")],
        );
        assert!(text.contains("\"quinn\""));
        assert!(!text.contains("{username}"));
    }

    #[test]
    fn lang_tag_maps_regional_variants() {
        assert_eq!(LocaleCode::from_lang_tag("de-AT"), Some(LocaleCode::De));
        assert_eq!(LocaleCode::from_lang_tag("en-US"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("pt-BR"), None);
    }
}
