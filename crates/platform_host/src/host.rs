//! Shared host-service bundle for storefront state composition.

use std::rc::Rc;

use crate::{
    ColorSchemeSource, MemoryColorSchemeSource, MemoryPrefsStore, MemoryThemeApplier,
    NoopColorSchemeSource, NoopPrefsStore, NoopThemeApplier, PrefsStore, ThemeApplier,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services (`localStorage`, `matchMedia`, document root).
    Browser,
    /// In-memory services used by tests and native builds.
    Memory,
    /// Placeholder services that persist nothing and apply nothing.
    Noop,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
            Self::Noop => "noop",
        }
    }
}

/// Host service bundle injected into the storefront stores.
///
/// Environment-specific service selection happens before this bundle reaches
/// `storefront_state`, which keeps the stores decoupled from browser adapter details.
#[derive(Clone)]
pub struct StoreHost {
    /// Durable key/value preference slots.
    pub prefs: Rc<dyn PrefsStore>,
    /// Platform color-scheme signal used to resolve the `system` theme preference.
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    /// Presentation sink for the effective theme.
    pub theme_applier: Rc<dyn ThemeApplier>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl StoreHost {
    /// Bundle that persists nothing, has no color-scheme signal, and applies nothing.
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            color_scheme: Rc::new(NoopColorSchemeSource),
            theme_applier: Rc::new(NoopThemeApplier),
            host_strategy: HostStrategy::Noop,
        }
    }

    /// Bundle built from in-memory services. Callers keep clones of the services to inspect them.
    pub fn memory(
        prefs: MemoryPrefsStore,
        color_scheme: MemoryColorSchemeSource,
        theme_applier: MemoryThemeApplier,
    ) -> Self {
        Self {
            prefs: Rc::new(prefs),
            color_scheme: Rc::new(color_scheme),
            theme_applier: Rc::new(theme_applier),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl std::fmt::Debug for StoreHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHost")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorScheme, EffectiveTheme};

    #[test]
    fn memory_host_shares_services_with_caller_handles() {
        let prefs = MemoryPrefsStore::default();
        let scheme = MemoryColorSchemeSource::new(ColorScheme::Light);
        let applier = MemoryThemeApplier::default();
        let host = StoreHost::memory(prefs.clone(), scheme.clone(), applier.clone());

        host.prefs.save_pref("k", "1").expect("save");
        assert_eq!(prefs.raw("k"), Some("1".to_string()));

        scheme.set(ColorScheme::Dark);
        assert_eq!(host.color_scheme.current(), ColorScheme::Dark);

        host.theme_applier.apply(EffectiveTheme::Dark);
        assert_eq!(applier.last(), Some(EffectiveTheme::Dark));
        assert_eq!(host.host_strategy.as_str(), "memory");
    }

    #[test]
    fn noop_host_reports_no_signal() {
        let host = StoreHost::noop();
        assert_eq!(host.color_scheme.current(), ColorScheme::Unavailable);
        assert_eq!(host.prefs.load_pref("k").expect("load"), None);
    }
}
