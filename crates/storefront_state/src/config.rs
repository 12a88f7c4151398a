//! Store configuration: persisted slot names, theme fallback, and presentation class.

use platform_host::{EffectiveTheme, DEFAULT_DARK_CLASS};

/// Default slot holding the favorites envelope.
pub const FAVORITES_STORAGE_KEY: &str = "favorites-storage";
/// Default slot holding the theme envelope.
pub const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub favorites_key: String,
    pub theme_key: String,
    /// Theme used for a `system` preference when the host exposes no color-scheme signal.
    pub fallback_theme: EffectiveTheme,
    /// Root-element class the host's theme applier toggles for the dark palette.
    pub dark_class: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            favorites_key: FAVORITES_STORAGE_KEY.to_string(),
            theme_key: THEME_STORAGE_KEY.to_string(),
            fallback_theme: EffectiveTheme::Light,
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }
}

impl StoreConfig {
    /// Returns a config whose slot names carry `prefix`, keeping several storefronts on one
    /// origin apart.
    pub fn with_key_prefix(prefix: &str) -> Self {
        Self {
            favorites_key: format!("{prefix}.{FAVORITES_STORAGE_KEY}"),
            theme_key: format!("{prefix}.{THEME_STORAGE_KEY}"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_documented_slots() {
        let config = StoreConfig::default();
        assert_eq!(config.favorites_key, "favorites-storage");
        assert_eq!(config.theme_key, "theme-storage");
        assert_eq!(config.fallback_theme, EffectiveTheme::Light);
        assert_eq!(config.dark_class, DEFAULT_DARK_CLASS);
        assert_eq!(config.dark_class, "dark");
    }

    #[test]
    fn prefixed_config_namespaces_both_slots() {
        let config = StoreConfig::with_key_prefix("shop-eu");
        assert_eq!(config.favorites_key, "shop-eu.favorites-storage");
        assert_eq!(config.theme_key, "shop-eu.theme-storage");
        assert_eq!(config.dark_class, "dark");
    }
}
