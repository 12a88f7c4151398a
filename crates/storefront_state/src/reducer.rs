//! Reducer actions, side-effect intents, and transition logic for the storefront stores.
//!
//! Reducers are total: every action applies to every state, and the returned effects tell the
//! owning store what to do after the state borrow is released.

mod theme;

use platform_host::EffectiveTheme;

use crate::model::{FavoritesState, Product, ProductId, ThemePreference, ThemeState};

pub use theme::reduce_theme;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_favorites`].
pub enum FavoritesAction {
    /// Insert or overwrite the snapshot keyed by `product.id`.
    Add {
        /// Snapshot to store.
        product: Product,
    },
    /// Delete the entry for `id` if present.
    Remove {
        /// Product to forget.
        id: ProductId,
    },
    /// Remove the entry if present, otherwise add it.
    Toggle {
        /// Snapshot to store when absent.
        product: Product,
    },
    /// Empty the collection.
    Clear,
    /// Replace state with a rehydrated snapshot.
    Hydrate {
        /// Rehydrated favorites.
        state: FavoritesState,
    },
    /// Restore the default state and drop the persisted slot.
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_theme`].
pub enum ThemeAction {
    /// Replace the stored preference.
    SetTheme {
        /// New preference.
        theme: ThemePreference,
    },
    /// Flip to the opposite of the current effective theme.
    ToggleTheme,
    /// The platform color-scheme signal changed.
    ColorSchemeChanged,
    /// Replace state with a rehydrated snapshot.
    Hydrate {
        /// Rehydrated preference.
        state: ThemeState,
    },
    /// Restore the default preference and drop the persisted slot.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by the reducers for the owning store to execute in order.
pub enum StoreEffect {
    /// Write the current state to its persisted slot.
    Persist,
    /// Delete the persisted slot.
    ClearPersisted,
    /// Notify subscribers of the current state.
    Notify,
}

const COMMIT: [StoreEffect; 2] = [StoreEffect::Persist, StoreEffect::Notify];
const RESET: [StoreEffect; 2] = [StoreEffect::ClearPersisted, StoreEffect::Notify];

/// Applies a [`FavoritesAction`] and returns the effects the store must run.
///
/// Overwriting an existing id keeps its position; removing and re-adding moves it to the end.
pub fn reduce_favorites(state: &mut FavoritesState, action: FavoritesAction) -> Vec<StoreEffect> {
    match action {
        FavoritesAction::Add { product } => {
            state.favorites.insert(product.id.clone(), product);
            COMMIT.to_vec()
        }
        FavoritesAction::Remove { id } => {
            if state.favorites.shift_remove(id.as_str()).is_some() {
                COMMIT.to_vec()
            } else {
                Vec::new()
            }
        }
        FavoritesAction::Toggle { product } => {
            if state.favorites.shift_remove(product.id.as_str()).is_none() {
                state.favorites.insert(product.id.clone(), product);
            }
            COMMIT.to_vec()
        }
        FavoritesAction::Clear => {
            state.favorites.clear();
            COMMIT.to_vec()
        }
        FavoritesAction::Hydrate { state: hydrated } => {
            *state = hydrated;
            vec![StoreEffect::Notify]
        }
        FavoritesAction::Reset => {
            *state = FavoritesState::default();
            RESET.to_vec()
        }
    }
}

/// Returns the effective theme for `state` given the resolved system theme.
pub(crate) fn effective_theme(state: &ThemeState, system_theme: EffectiveTheme) -> EffectiveTheme {
    state.theme.resolve(system_theme)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, format!("Product {id}"), price)
    }

    fn add(state: &mut FavoritesState, product: Product) -> Vec<StoreEffect> {
        reduce_favorites(state, FavoritesAction::Add { product })
    }

    fn remove(state: &mut FavoritesState, id: &str) -> Vec<StoreEffect> {
        reduce_favorites(state, FavoritesAction::Remove { id: id.into() })
    }

    #[test]
    fn add_new_product_grows_by_one_and_commits() {
        let mut state = FavoritesState::default();
        let effects = add(&mut state, product("p1", 100.0));

        assert_eq!(state.count(), 1);
        assert!(state.is_favorite("p1"));
        assert_eq!(effects, vec![StoreEffect::Persist, StoreEffect::Notify]);
    }

    #[test]
    fn re_adding_same_id_overwrites_in_place() {
        let mut state = FavoritesState::default();
        add(&mut state, product("p1", 100.0));
        add(&mut state, product("p2", 20.0));
        add(&mut state, product("p1", 80.0));

        assert_eq!(state.count(), 2);
        assert_eq!(state.ids(), vec![ProductId::from("p1"), ProductId::from("p2")]);
        assert_eq!(state.get("p1").map(|p| p.price), Some(80.0));
    }

    #[test]
    fn removing_unknown_id_is_a_silent_noop() {
        let mut state = FavoritesState::default();
        add(&mut state, product("p1", 100.0));
        let before = state.clone();

        let effects = remove(&mut state, "missing");
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn add_then_remove_restores_original_count() {
        let mut state = FavoritesState::default();
        add(&mut state, product("p0", 1.0));
        let original = state.count();

        add(&mut state, product("p1", 100.0));
        let effects = remove(&mut state, "p1");

        assert!(!state.is_favorite("p1"));
        assert_eq!(state.count(), original);
        assert_eq!(effects, vec![StoreEffect::Persist, StoreEffect::Notify]);
    }

    #[test]
    fn remove_then_re_add_moves_entry_to_end() {
        let mut state = FavoritesState::default();
        for id in ["a", "b", "c"] {
            add(&mut state, product(id, 1.0));
        }
        remove(&mut state, "a");
        add(&mut state, product("a", 1.0));

        assert_eq!(
            state.ids(),
            vec![ProductId::from("b"), ProductId::from("c"), ProductId::from("a")]
        );
    }

    #[test]
    fn remove_keeps_order_of_remaining_entries() {
        let mut state = FavoritesState::default();
        for id in ["a", "b", "c", "d"] {
            add(&mut state, product(id, 1.0));
        }
        remove(&mut state, "b");
        assert_eq!(
            state.ids(),
            vec![ProductId::from("a"), ProductId::from("c"), ProductId::from("d")]
        );
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = FavoritesState::default();
        let p1 = product("p1", 100.0);

        reduce_favorites(&mut state, FavoritesAction::Toggle { product: p1.clone() });
        assert!(state.is_favorite("p1"));

        reduce_favorites(&mut state, FavoritesAction::Toggle { product: p1 });
        assert!(!state.is_favorite("p1"));
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn clear_empties_any_state() {
        let mut state = FavoritesState::default();
        let effects = reduce_favorites(&mut state, FavoritesAction::Clear);
        assert_eq!(state.count(), 0);
        assert_eq!(effects, vec![StoreEffect::Persist, StoreEffect::Notify]);

        for id in ["a", "b", "c"] {
            add(&mut state, product(id, 1.0));
        }
        reduce_favorites(&mut state, FavoritesAction::Clear);
        assert_eq!(state.count(), 0);
        assert!(state.to_array().is_empty());
    }

    #[test]
    fn hydrate_replaces_state_without_persisting() {
        let mut hydrated = FavoritesState::default();
        add(&mut hydrated, product("p9", 9.0));

        let mut state = FavoritesState::default();
        add(&mut state, product("p1", 1.0));
        let effects = reduce_favorites(
            &mut state,
            FavoritesAction::Hydrate {
                state: hydrated.clone(),
            },
        );

        assert_eq!(state, hydrated);
        assert_eq!(effects, vec![StoreEffect::Notify]);
    }

    #[test]
    fn reset_clears_state_and_persisted_slot() {
        let mut state = FavoritesState::default();
        add(&mut state, product("p1", 1.0));
        let effects = reduce_favorites(&mut state, FavoritesAction::Reset);

        assert_eq!(state, FavoritesState::default());
        assert_eq!(effects, vec![StoreEffect::ClearPersisted, StoreEffect::Notify]);
    }

    #[test]
    fn array_and_count_agree_across_mixed_sequences() {
        let mut state = FavoritesState::default();
        let ids = ["a", "b", "c", "d", "e"];

        for step in 0..40usize {
            let id = ids[step * 7 % ids.len()];
            if step % 3 == 0 {
                remove(&mut state, id);
            } else {
                add(&mut state, product(id, step as f64));
            }

            let array = state.to_array();
            assert_eq!(array.len(), state.count());
            assert!(array.iter().all(|p| state.is_favorite(p.id.as_str())));
        }
    }
}
