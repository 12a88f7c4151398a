//! Browser color-scheme signal and document-root theme application.

use platform_host::{
    ColorScheme, ColorSchemeListener, ColorSchemeSource, ColorSchemeWatch, EffectiveTheme,
    ThemeApplier, DEFAULT_DARK_CLASS,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Media query reporting the platform's dark color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(target_arch = "wasm32")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source backed by `window.matchMedia`.
///
/// Reports [`ColorScheme::Unavailable`] outside the browser or when `matchMedia` is missing.
pub struct WebColorSchemeSource;

impl ColorSchemeSource for WebColorSchemeSource {
    fn current(&self) -> ColorScheme {
        #[cfg(target_arch = "wasm32")]
        {
            match dark_scheme_query() {
                Some(query) if query.matches() => ColorScheme::Dark,
                Some(_) => ColorScheme::Light,
                None => ColorScheme::Unavailable,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            ColorScheme::Unavailable
        }
    }

    /// Registers a `change` listener on the `matchMedia` query.
    ///
    /// Outside the browser, or when `matchMedia` is unavailable, the returned handle is inert.
    fn watch(&self, on_change: ColorSchemeListener) -> ColorSchemeWatch {
        #[cfg(target_arch = "wasm32")]
        {
            match MediaQueryListener::register(on_change) {
                Some(listener) => ColorSchemeWatch::new(listener),
                None => ColorSchemeWatch::inert(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = on_change;
            ColorSchemeWatch::inert()
        }
    }
}

#[derive(Debug, Clone)]
/// Theme applier that toggles a class on `document.documentElement`.
pub struct DocumentThemeApplier {
    dark_class: String,
}

impl DocumentThemeApplier {
    /// Creates an applier toggling `dark_class`.
    pub fn new(dark_class: impl Into<String>) -> Self {
        Self {
            dark_class: dark_class.into(),
        }
    }

    /// Returns the class toggled for the dark palette.
    pub fn dark_class(&self) -> &str {
        &self.dark_class
    }
}

impl Default for DocumentThemeApplier {
    fn default() -> Self {
        Self::new(DEFAULT_DARK_CLASS)
    }
}

impl ThemeApplier for DocumentThemeApplier {
    fn apply(&self, theme: EffectiveTheme) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            let _ = if theme.is_dark() {
                classes.add_1(&self.dark_class)
            } else {
                classes.remove_1(&self.dark_class)
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = theme;
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct MediaQueryListener {
    query: web_sys::MediaQueryList,
    on_change: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl MediaQueryListener {
    fn register(listener: ColorSchemeListener) -> Option<Self> {
        let query = dark_scheme_query()?;
        let query_for_change = query.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            let scheme = if query_for_change.matches() {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            };
            listener(scheme);
        }));
        query
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, on_change })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        let callback = self.on_change.as_ref().unchecked_ref();
        let _ = self
            .query
            .remove_event_listener_with_callback("change", callback);
    }
}
