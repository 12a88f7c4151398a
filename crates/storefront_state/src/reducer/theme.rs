//! Reducer helpers for theme preference transitions.

use platform_host::EffectiveTheme;

use crate::{
    model::{ThemePreference, ThemeState},
    reducer::{effective_theme, StoreEffect, ThemeAction, COMMIT, RESET},
};

/// Applies a [`ThemeAction`] and returns the effects the store must run.
///
/// `system_theme` is the platform signal already resolved to a concrete theme. `SetTheme`
/// always notifies, even when the preference is unchanged, so the presentation layer is
/// re-aligned on every call.
pub fn reduce_theme(
    state: &mut ThemeState,
    action: ThemeAction,
    system_theme: EffectiveTheme,
) -> Vec<StoreEffect> {
    match action {
        ThemeAction::SetTheme { theme } => {
            state.theme = theme;
            COMMIT.to_vec()
        }
        ThemeAction::ToggleTheme => {
            let current = effective_theme(state, system_theme);
            state.theme = ThemePreference::from(current.opposite());
            COMMIT.to_vec()
        }
        ThemeAction::ColorSchemeChanged => {
            if state.theme == ThemePreference::System {
                vec![StoreEffect::Notify]
            } else {
                Vec::new()
            }
        }
        ThemeAction::Hydrate { state: hydrated } => {
            *state = hydrated;
            vec![StoreEffect::Notify]
        }
        ThemeAction::Reset => {
            *state = ThemeState::default();
            RESET.to_vec()
        }
    }
}
