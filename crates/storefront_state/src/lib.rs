//! Client-side storefront state: persisted favorites and theme stores.
//!
//! Transitions live in [`reducer`] as pure functions, [`codec`] owns the persisted text format,
//! [`persistence`] absorbs storage failures, and [`store`] wraps all three into injectable
//! containers. [`runtime_context`] exposes the containers to Leptos components.

pub mod codec;
pub mod config;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod store;

pub use codec::{
    deserialize_favorites, deserialize_theme, serialize_favorites, serialize_theme, CodecError,
    PERSIST_SCHEMA_VERSION,
};
pub use config::{StoreConfig, FAVORITES_STORAGE_KEY, THEME_STORAGE_KEY};
pub use model::*;
pub use reducer::{reduce_favorites, reduce_theme, FavoritesAction, StoreEffect, ThemeAction};
pub use runtime_context::{use_storefront, StorefrontContext, StorefrontProvider};
pub use store::{
    bind_theme_applier, watch_color_scheme, FavoritesStore, StorefrontStores, SubscriptionId,
    ThemeStore,
};
