//! Typed host-domain contracts shared by the storefront stores and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference
//! storage contract, the platform color-scheme signal, and the presentation sink used to apply
//! the effective theme. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod storage;
pub mod theme;

pub use host::{HostStrategy, StoreHost};
pub use storage::prefs::{
    MemoryPrefsStore, NoopPrefsStore, PrefsStore, UnavailablePrefsStore,
};
pub use theme::{
    ColorScheme, ColorSchemeListener, ColorSchemeSource, ColorSchemeWatch, EffectiveTheme,
    MemoryColorSchemeSource, MemoryThemeApplier, NoopColorSchemeSource, NoopThemeApplier,
    ThemeApplier, DEFAULT_DARK_CLASS,
};
