//! Store containers: explicit, injectable instances wrapping the reducers with persistence and
//! change notifications.

mod favorites;
mod listeners;
mod theme;

use std::rc::Rc;

use platform_host::{ColorScheme, ColorSchemeWatch, StoreHost, ThemeApplier};

use crate::config::StoreConfig;

pub use favorites::FavoritesStore;
pub use listeners::SubscriptionId;
pub use theme::ThemeStore;

/// Applies the current effective theme through `applier`, then re-applies it after every
/// theme notification. Returns the subscription so the caller can detach the applier.
pub fn bind_theme_applier(store: &ThemeStore, applier: Rc<dyn ThemeApplier>) -> SubscriptionId {
    applier.apply(store.effective_theme());
    store.subscribe(move |change| applier.apply(change.effective))
}

/// Forwards platform color-scheme changes to `store` until the returned handle is dropped.
pub fn watch_color_scheme(store: &ThemeStore, host: &StoreHost) -> ColorSchemeWatch {
    let store = store.clone();
    host.color_scheme
        .watch(Rc::new(move |_: ColorScheme| store.color_scheme_changed()))
}

#[derive(Clone)]
/// Both storefront stores, rehydrated and wired to the host presentation layer.
///
/// The color-scheme listener stays installed while any clone of the bundle is alive.
pub struct StorefrontStores {
    pub favorites: FavoritesStore,
    pub theme: ThemeStore,
    pub applier_subscription: SubscriptionId,
    color_scheme_watch: Rc<ColorSchemeWatch>,
}

impl StorefrontStores {
    /// Rehydrates both stores from `host`, aligns the presentation layer with the rehydrated
    /// theme, and starts following platform color-scheme changes.
    pub fn boot(host: &StoreHost, config: &StoreConfig) -> Self {
        let favorites = FavoritesStore::load(host.prefs.clone(), config);
        let theme = ThemeStore::load(host.prefs.clone(), host.color_scheme.clone(), config);
        let applier_subscription = bind_theme_applier(&theme, host.theme_applier.clone());
        let color_scheme_watch = Rc::new(watch_color_scheme(&theme, host));
        Self {
            favorites,
            theme,
            applier_subscription,
            color_scheme_watch,
        }
    }

    /// Returns whether platform color-scheme changes reach the theme store.
    pub fn follows_color_scheme(&self) -> bool {
        self.color_scheme_watch.is_active()
    }
}
