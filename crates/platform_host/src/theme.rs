//! Color-scheme signal and presentation contracts for theme resolution.

use std::{
    any::Any,
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Concrete theme actually applied to the presentation layer.
pub enum EffectiveTheme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl EffectiveTheme {
    /// Returns the other concrete theme.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns whether this is the dark palette.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns a stable lowercase token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Platform color-scheme preference as reported by the host.
pub enum ColorScheme {
    /// The host prefers a light scheme.
    Light,
    /// The host prefers a dark scheme.
    Dark,
    /// The host exposes no color-scheme signal.
    Unavailable,
}

impl ColorScheme {
    /// Resolves the signal to a concrete theme, using `fallback` when no signal exists.
    pub const fn resolve(self, fallback: EffectiveTheme) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::Unavailable => fallback,
        }
    }
}

/// Class toggled on the root element when the dark palette is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Callback receiving the new signal after the platform color scheme changes.
pub type ColorSchemeListener = Rc<dyn Fn(ColorScheme)>;

/// Registration returned by [`ColorSchemeSource::watch`].
///
/// Dropping the handle stops delivery to the listener.
pub struct ColorSchemeWatch {
    guard: Option<Box<dyn Any>>,
}

impl ColorSchemeWatch {
    /// Handle for a source that never reports changes.
    pub fn inert() -> Self {
        Self { guard: None }
    }

    /// Handle owning `guard`; the guard's `Drop` unregisters the listener.
    pub fn new(guard: impl Any) -> Self {
        Self {
            guard: Some(Box::new(guard)),
        }
    }

    /// Returns whether a listener is actually installed.
    pub fn is_active(&self) -> bool {
        self.guard.is_some()
    }
}

impl fmt::Debug for ColorSchemeWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeWatch")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Host service reporting the platform's current color-scheme preference.
pub trait ColorSchemeSource {
    /// Returns the current color-scheme signal. Must not cache; every call re-reads the host.
    fn current(&self) -> ColorScheme;

    /// Calls `on_change` whenever the signal changes, until the returned handle is dropped.
    ///
    /// Sources without change notifications return an inert handle.
    fn watch(&self, on_change: ColorSchemeListener) -> ColorSchemeWatch {
        let _ = on_change;
        ColorSchemeWatch::inert()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source for hosts without a platform signal.
pub struct NoopColorSchemeSource;

impl ColorSchemeSource for NoopColorSchemeSource {
    fn current(&self) -> ColorScheme {
        ColorScheme::Unavailable
    }
}

struct MemorySchemeState {
    scheme: Cell<ColorScheme>,
    next_watch: Cell<u64>,
    watchers: RefCell<Vec<(u64, ColorSchemeListener)>>,
}

struct MemoryWatchGuard {
    state: Weak<MemorySchemeState>,
    id: u64,
}

impl Drop for MemoryWatchGuard {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .watchers
                .borrow_mut()
                .retain(|(watch_id, _)| *watch_id != self.id);
        }
    }
}

#[derive(Clone)]
/// In-memory color-scheme source whose signal can be changed at runtime.
///
/// Changing the signal notifies every live watcher, like the browser `change` event.
pub struct MemoryColorSchemeSource {
    inner: Rc<MemorySchemeState>,
}

impl MemoryColorSchemeSource {
    /// Creates a source reporting `scheme`.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            inner: Rc::new(MemorySchemeState {
                scheme: Cell::new(scheme),
                next_watch: Cell::new(1),
                watchers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Changes the reported signal. Clones observe the change, and watchers are called when the
    /// value actually differs.
    pub fn set(&self, scheme: ColorScheme) {
        if self.inner.scheme.replace(scheme) == scheme {
            return;
        }
        let watchers: Vec<ColorSchemeListener> = self
            .inner
            .watchers
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in watchers {
            listener(scheme);
        }
    }

    /// Number of live watchers.
    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.borrow().len()
    }
}

impl Default for MemoryColorSchemeSource {
    fn default() -> Self {
        Self::new(ColorScheme::Unavailable)
    }
}

impl fmt::Debug for MemoryColorSchemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryColorSchemeSource")
            .field("scheme", &self.inner.scheme.get())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

impl ColorSchemeSource for MemoryColorSchemeSource {
    fn current(&self) -> ColorScheme {
        self.inner.scheme.get()
    }

    fn watch(&self, on_change: ColorSchemeListener) -> ColorSchemeWatch {
        let id = self.inner.next_watch.get();
        self.inner.next_watch.set(id + 1);
        self.inner.watchers.borrow_mut().push((id, on_change));
        ColorSchemeWatch::new(MemoryWatchGuard {
            state: Rc::downgrade(&self.inner),
            id,
        })
    }
}

/// Presentation sink that makes the visual state match an effective theme.
pub trait ThemeApplier {
    /// Applies `theme` synchronously.
    fn apply(&self, theme: EffectiveTheme);
}

#[derive(Debug, Clone, Copy, Default)]
/// Theme applier for hosts without a presentation layer.
pub struct NoopThemeApplier;

impl ThemeApplier for NoopThemeApplier {
    fn apply(&self, _theme: EffectiveTheme) {}
}

#[derive(Debug, Clone, Default)]
/// Theme applier that records every application, in order.
pub struct MemoryThemeApplier {
    applied: Rc<RefCell<Vec<EffectiveTheme>>>,
}

impl MemoryThemeApplier {
    /// Returns every theme applied so far.
    pub fn applied(&self) -> Vec<EffectiveTheme> {
        self.applied.borrow().clone()
    }

    /// Returns the most recently applied theme.
    pub fn last(&self) -> Option<EffectiveTheme> {
        self.applied.borrow().last().copied()
    }
}

impl ThemeApplier for MemoryThemeApplier {
    fn apply(&self, theme: EffectiveTheme) {
        self.applied.borrow_mut().push(theme);
    }
}
