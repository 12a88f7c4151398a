//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for preference slots
//! (`localStorage`), the platform color-scheme signal (`matchMedia`), and root-element theme
//! application. Every adapter compiles natively as an inert fallback so the stores can be tested
//! off the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;
pub mod theme;

pub use adapters::{
    build_store_host, color_scheme_source, host_strategy_name, prefs_store,
    selected_host_strategy, theme_applier, ColorSchemeSourceAdapter, PrefsStoreAdapter,
    ThemeApplierAdapter,
};
pub use storage::local_prefs::WebPrefsStore;
pub use theme::{DocumentThemeApplier, WebColorSchemeSource, DARK_SCHEME_QUERY};
