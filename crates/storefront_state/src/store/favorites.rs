use std::{cell::RefCell, rc::Rc};

use platform_host::PrefsStore;

use crate::{
    config::StoreConfig,
    model::{FavoritesState, Product, ProductId},
    persistence::{self, PersistAdapter},
    reducer::{reduce_favorites, FavoritesAction, StoreEffect},
    store::listeners::{Listeners, SubscriptionId},
};

#[derive(Default)]
struct FavoritesInner {
    state: FavoritesState,
    listeners: Listeners<FavoritesState>,
}

#[derive(Clone)]
/// Normalized, persisted collection of favorited product snapshots.
///
/// Clones share state. Every operation is total and synchronous; persistence failures are
/// logged and never roll back the in-memory change.
pub struct FavoritesStore {
    inner: Rc<RefCell<FavoritesInner>>,
    persistence: PersistAdapter,
    key: Rc<str>,
}

impl FavoritesStore {
    /// Creates an empty store bound to the configured favorites slot without reading it.
    pub fn new(prefs: Rc<dyn PrefsStore>, config: &StoreConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FavoritesInner::default())),
            persistence: PersistAdapter::new(prefs),
            key: Rc::from(config.favorites_key.as_str()),
        }
    }

    /// Creates a store and rehydrates it from the persisted slot.
    pub fn load(prefs: Rc<dyn PrefsStore>, config: &StoreConfig) -> Self {
        let store = Self::new(prefs, config);
        store.rehydrate();
        store
    }

    /// Replaces in-memory state with the persisted slot, or with an empty collection when the
    /// slot is absent or unreadable. Returns whether persisted favorites were found.
    pub fn rehydrate(&self) -> bool {
        let loaded = persistence::load_favorites(&self.persistence, &self.key);
        let found = loaded.is_some();
        self.dispatch(FavoritesAction::Hydrate {
            state: loaded.unwrap_or_default(),
        });
        found
    }

    pub fn add(&self, product: Product) {
        self.dispatch(FavoritesAction::Add { product });
    }

    /// Removes `id` if present. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) {
        self.dispatch(FavoritesAction::Remove {
            id: ProductId::from(id),
        });
    }

    /// Adds `product` when absent, removes it when present. Returns the resulting membership.
    pub fn toggle(&self, product: Product) -> bool {
        let id = product.id.clone();
        self.dispatch(FavoritesAction::Toggle { product });
        self.is_favorite(id.as_str())
    }

    pub fn clear(&self) {
        self.dispatch(FavoritesAction::Clear);
    }

    /// Restores the empty default and deletes the persisted slot.
    pub fn reset(&self) {
        self.dispatch(FavoritesAction::Reset);
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.inner.borrow().state.is_favorite(id)
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.inner.borrow().state.get(id).cloned()
    }

    /// Snapshots in insertion order.
    pub fn to_array(&self) -> Vec<Product> {
        self.inner.borrow().state.to_array()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.inner.borrow().state.ids()
    }

    pub fn count(&self) -> usize {
        self.inner.borrow().state.count()
    }

    pub fn state(&self) -> FavoritesState {
        self.inner.borrow().state.clone()
    }

    /// Registers `listener`, called with the new state after every change.
    pub fn subscribe(&self, listener: impl Fn(&FavoritesState) + 'static) -> SubscriptionId {
        self.inner.borrow_mut().listeners.insert(Rc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().listeners.remove(id)
    }

    fn dispatch(&self, action: FavoritesAction) {
        let effects = reduce_favorites(&mut self.inner.borrow_mut().state, action);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: StoreEffect) {
        match effect {
            StoreEffect::Persist => persistence::persist_favorites(
                &self.persistence,
                &self.key,
                &self.inner.borrow().state,
            ),
            StoreEffect::ClearPersisted => self.persistence.clear(&self.key),
            StoreEffect::Notify => {
                let (state, listeners) = {
                    let inner = self.inner.borrow();
                    (inner.state.clone(), inner.listeners.snapshot())
                };
                for listener in listeners {
                    listener(&state);
                }
            }
        }
    }
}
