use platform_host::{
    ColorScheme, ColorSchemeListener, ColorSchemeSource, ColorSchemeWatch, EffectiveTheme,
    HostStrategy, NoopColorSchemeSource, NoopPrefsStore, NoopThemeApplier, PrefsStore, StoreHost,
    ThemeApplier,
};
use std::rc::Rc;

use crate::{DocumentThemeApplier, WebColorSchemeSource, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "noop-host")]
    {
        HostStrategy::Noop
    }

    #[cfg(not(feature = "noop-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// No-op fallback used when persistence is intentionally disabled.
    Noop(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Noop(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Noop(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Noop(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete color-scheme backend behind [`ColorSchemeSource`].
#[derive(Debug, Clone, Copy)]
pub enum ColorSchemeSourceAdapter {
    /// Browser `matchMedia` signal.
    Browser(WebColorSchemeSource),
    /// No signal.
    Noop(NoopColorSchemeSource),
}

impl ColorSchemeSource for ColorSchemeSourceAdapter {
    fn current(&self) -> ColorScheme {
        match self {
            Self::Browser(source) => source.current(),
            Self::Noop(source) => source.current(),
        }
    }

    fn watch(&self, on_change: ColorSchemeListener) -> ColorSchemeWatch {
        match self {
            Self::Browser(source) => source.watch(on_change),
            Self::Noop(source) => source.watch(on_change),
        }
    }
}

/// Adapter enum that erases the concrete presentation sink behind [`ThemeApplier`].
#[derive(Debug, Clone)]
pub enum ThemeApplierAdapter {
    /// Root-element class toggling.
    Browser(DocumentThemeApplier),
    /// Applies nothing.
    Noop(NoopThemeApplier),
}

impl ThemeApplier for ThemeApplierAdapter {
    fn apply(&self, theme: EffectiveTheme) {
        match self {
            Self::Browser(applier) => applier.apply(theme),
            Self::Noop(applier) => applier.apply(theme),
        }
    }
}

/// Builds the preference adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Memory | HostStrategy::Noop => PrefsStoreAdapter::Noop(NoopPrefsStore),
    }
}

/// Builds the color-scheme adapter for the compile-time selected host strategy.
pub fn color_scheme_source() -> ColorSchemeSourceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ColorSchemeSourceAdapter::Browser(WebColorSchemeSource),
        HostStrategy::Memory | HostStrategy::Noop => {
            ColorSchemeSourceAdapter::Noop(NoopColorSchemeSource)
        }
    }
}

/// Builds the theme applier for the compile-time selected host strategy.
pub fn theme_applier(dark_class: &str) -> ThemeApplierAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ThemeApplierAdapter::Browser(DocumentThemeApplier::new(dark_class))
        }
        HostStrategy::Memory | HostStrategy::Noop => ThemeApplierAdapter::Noop(NoopThemeApplier),
    }
}

/// Builds the [`StoreHost`] bundle for the compile-time selected host strategy.
pub fn build_store_host(dark_class: &str) -> StoreHost {
    StoreHost {
        prefs: Rc::new(prefs_store()),
        color_scheme: Rc::new(color_scheme_source()),
        theme_applier: Rc::new(theme_applier(dark_class)),
        host_strategy: selected_host_strategy(),
    }
}
