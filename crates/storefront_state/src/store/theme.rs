use std::{cell::RefCell, rc::Rc};

use platform_host::{ColorSchemeSource, EffectiveTheme, PrefsStore};

use crate::{
    config::StoreConfig,
    model::{ThemeChange, ThemePreference, ThemeState},
    persistence::{self, PersistAdapter},
    reducer::{effective_theme, reduce_theme, StoreEffect, ThemeAction},
    store::listeners::{Listeners, SubscriptionId},
};

#[derive(Default)]
struct ThemeInner {
    state: ThemeState,
    listeners: Listeners<ThemeChange>,
}

#[derive(Clone)]
/// Persisted tri-state theme preference with a derived effective theme.
///
/// The effective theme is resolved on every query; `system` is never cached. Listeners receive
/// a [`ThemeChange`] after every mutation, including no-op `set_theme` calls, so a presentation
/// listener can keep the visual state aligned.
pub struct ThemeStore {
    inner: Rc<RefCell<ThemeInner>>,
    persistence: PersistAdapter,
    key: Rc<str>,
    color_scheme: Rc<dyn ColorSchemeSource>,
    fallback_theme: EffectiveTheme,
}

impl ThemeStore {
    /// Creates a store holding the default `system` preference without reading the slot.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        color_scheme: Rc<dyn ColorSchemeSource>,
        config: &StoreConfig,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ThemeInner::default())),
            persistence: PersistAdapter::new(prefs),
            key: Rc::from(config.theme_key.as_str()),
            color_scheme,
            fallback_theme: config.fallback_theme,
        }
    }

    /// Creates a store and rehydrates it from the persisted slot.
    pub fn load(
        prefs: Rc<dyn PrefsStore>,
        color_scheme: Rc<dyn ColorSchemeSource>,
        config: &StoreConfig,
    ) -> Self {
        let store = Self::new(prefs, color_scheme, config);
        store.rehydrate();
        store
    }

    /// Replaces the preference with the persisted slot, or with `system` when the slot is absent
    /// or unreadable. Returns whether a persisted preference was found.
    pub fn rehydrate(&self) -> bool {
        let loaded = persistence::load_theme(&self.persistence, &self.key);
        let found = loaded.is_some();
        self.dispatch(ThemeAction::Hydrate {
            state: loaded.unwrap_or_default(),
        });
        found
    }

    pub fn preference(&self) -> ThemePreference {
        self.inner.borrow().state.theme
    }

    /// Resolves the preference against the current platform signal.
    pub fn effective_theme(&self) -> EffectiveTheme {
        let system_theme = self.system_theme();
        effective_theme(&self.inner.borrow().state, system_theme)
    }

    pub fn set_theme(&self, theme: ThemePreference) {
        self.dispatch(ThemeAction::SetTheme { theme });
    }

    /// Switches to the opposite of the current effective theme. Never selects `system`.
    pub fn toggle_theme(&self) {
        self.dispatch(ThemeAction::ToggleTheme);
    }

    /// Re-notifies listeners when the platform color scheme changed under a `system` preference.
    pub fn color_scheme_changed(&self) {
        self.dispatch(ThemeAction::ColorSchemeChanged);
    }

    /// Restores `system` and deletes the persisted slot.
    pub fn reset(&self) {
        self.dispatch(ThemeAction::Reset);
    }

    pub fn change(&self) -> ThemeChange {
        ThemeChange {
            preference: self.preference(),
            effective: self.effective_theme(),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&ThemeChange) + 'static) -> SubscriptionId {
        self.inner.borrow_mut().listeners.insert(Rc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().listeners.remove(id)
    }

    fn system_theme(&self) -> EffectiveTheme {
        self.color_scheme.current().resolve(self.fallback_theme)
    }

    fn dispatch(&self, action: ThemeAction) {
        let system_theme = self.system_theme();
        let effects = reduce_theme(&mut self.inner.borrow_mut().state, action, system_theme);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: StoreEffect) {
        match effect {
            StoreEffect::Persist => persistence::persist_theme(
                &self.persistence,
                &self.key,
                &self.inner.borrow().state,
            ),
            StoreEffect::ClearPersisted => self.persistence.clear(&self.key),
            StoreEffect::Notify => {
                let change = self.change();
                let listeners = self.inner.borrow().listeners.snapshot();
                for listener in listeners {
                    listener(&change);
                }
            }
        }
    }
}
