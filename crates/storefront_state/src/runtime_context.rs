//! Leptos provider and context wiring for the storefront stores.
//!
//! This module owns the long-lived store bundle (and with it the platform color-scheme listener)
//! for the provider's lifetime and mirrors each store into a reactive signal. Rendering stays in
//! the consuming crate.

use leptos::*;
use platform_host::{EffectiveTheme, StoreHost};

use crate::{
    config::StoreConfig,
    model::{FavoritesState, Product, ThemeChange, ThemePreference},
    store::StorefrontStores,
};

#[derive(Clone, Copy)]
/// Leptos context for reading store state and invoking store operations.
pub struct StorefrontContext {
    /// Rehydrated store bundle.
    pub stores: StoredValue<StorefrontStores>,
    /// Reactive mirror of the favorites store.
    pub favorites: RwSignal<FavoritesState>,
    /// Reactive mirror of the theme store.
    pub theme: RwSignal<ThemeChange>,
}

impl StorefrontContext {
    pub fn add_favorite(&self, product: Product) {
        self.stores.with_value(|stores| stores.favorites.add(product));
    }

    pub fn remove_favorite(&self, id: &str) {
        self.stores.with_value(|stores| stores.favorites.remove(id));
    }

    pub fn toggle_favorite(&self, product: Product) -> bool {
        self.stores
            .with_value(|stores| stores.favorites.toggle(product))
    }

    pub fn clear_favorites(&self) {
        self.stores.with_value(|stores| stores.favorites.clear());
    }

    /// Reactive membership query.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.with(|state| state.is_favorite(id))
    }

    /// Reactive favorites count.
    pub fn favorites_count(&self) -> usize {
        self.favorites.with(FavoritesState::count)
    }

    pub fn set_theme(&self, theme: ThemePreference) {
        self.stores.with_value(|stores| stores.theme.set_theme(theme));
    }

    pub fn toggle_theme(&self) {
        self.stores.with_value(|stores| stores.theme.toggle_theme());
    }

    /// Reactive effective theme.
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.theme.with(|change| change.effective)
    }
}

#[component]
/// Provides [`StorefrontContext`] to descendant components and boots persisted state.
pub fn StorefrontProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host: StoreHost,
    /// Slot names and theme defaults; [`StoreConfig::default`] when omitted.
    #[prop(optional)]
    config: Option<StoreConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let stores = StorefrontStores::boot(&host, &config);
    logging::log!(
        "storefront stores booted on {} host: {} favorites, theme {}, following color scheme: {}",
        host.host_strategy.as_str(),
        stores.favorites.count(),
        stores.theme.preference(),
        stores.follows_color_scheme()
    );

    let favorites = create_rw_signal(stores.favorites.state());
    let theme = create_rw_signal(stores.theme.change());
    stores
        .favorites
        .subscribe(move |state| favorites.set(state.clone()));
    stores.theme.subscribe(move |change| theme.set(*change));

    let runtime = StorefrontContext {
        stores: store_value(stores),
        favorites,
        theme,
    };
    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`StorefrontContext`].
///
/// # Panics
///
/// Panics if called outside [`StorefrontProvider`].
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext not provided")
}
