//! Theme preference shared by the shell and persisted settings.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and persisted settings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted identifier back into a mode.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode, used by the shell toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_round_trips_persisted_values() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_value(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_value("sepia"), None);
    }

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
