use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Preference key holding the last applied mode (`"light"` / `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Preference key present (as `"true"`) while the user override is active.
pub const THEME_OVERRIDE_KEY: &str = "themeOverride";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to the viewport's theme attribute and to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button: it advertises the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{FE0F}",
            Self::Light => "\u{1F319}",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode {:?}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

/// Effective theme of one viewer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    /// Set when the user picked the mode explicitly; cleared by the next system change.
    pub user_override: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_parse_round_trips_attribute_values() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "Dark".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err, UnknownThemeMode("Dark".to_string()));
        assert!("".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_toggle_icon_advertises_other_mode() {
        assert_eq!(ThemeMode::Dark.toggle_icon(), "\u{2600}\u{FE0F}");
        assert_eq!(ThemeMode::Light.toggle_icon(), "\u{1F319}");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
