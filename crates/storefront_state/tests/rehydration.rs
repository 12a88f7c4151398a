use std::rc::Rc;

use platform_host::{
    ColorScheme, EffectiveTheme, MemoryColorSchemeSource, MemoryPrefsStore, MemoryThemeApplier,
    StoreHost,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_state::{
    FavoritesStore, Product, ProductId, StoreConfig, StorefrontStores, ThemePreference,
    ThemeStore,
};

fn phone() -> Product {
    let mut product = Product::new("p1", "Phone", 100.0);
    product.images = vec!["/images/phone.jpg".to_string()];
    product.category = "electronics".to_string();
    product.rating = Some(4.6);
    product
}

fn memory_host(
    prefs: &MemoryPrefsStore,
    scheme: ColorScheme,
) -> (StoreHost, MemoryColorSchemeSource, MemoryThemeApplier) {
    let source = MemoryColorSchemeSource::new(scheme);
    let applier = MemoryThemeApplier::default();
    let host = StoreHost::memory(prefs.clone(), source.clone(), applier.clone());
    (host, source, applier)
}

#[test]
fn persisted_favorites_slot_rehydrates_every_entry() {
    let prefs = MemoryPrefsStore::default();
    let slot = json!({
        "state": {
            "favorites": {
                "p1": {"id": "p1", "name": "Phone", "price": 100.0, "currency": "USD"},
                "p2": {"id": "p2", "name": "Case", "price": 9.5, "currency": "USD"}
            }
        },
        "version": 0
    });
    prefs.insert_raw("favorites-storage", slot.to_string());

    let store = FavoritesStore::load(Rc::new(prefs), &StoreConfig::default());
    assert!(store.is_favorite("p1"));
    assert!(store.is_favorite("p2"));
    assert_eq!(store.count(), 2);
}

#[test]
fn corrupted_favorites_slot_falls_back_to_empty_collection() {
    let prefs = MemoryPrefsStore::default();
    let store = FavoritesStore::load(Rc::new(prefs.clone()), &StoreConfig::default());
    store.add(phone());
    assert!(prefs.raw("favorites-storage").is_some());

    prefs.insert_raw("favorites-storage", "{\"state\":{\"favorites\":{\"p1\":");

    let reloaded = FavoritesStore::load(Rc::new(prefs.clone()), &StoreConfig::default());
    assert_eq!(reloaded.count(), 0);
    assert!(!reloaded.is_favorite("p1"));

    assert!(!store.rehydrate());
    assert_eq!(store.count(), 0);
}

#[test]
fn favorites_order_survives_reload_including_re_add() {
    let prefs = MemoryPrefsStore::default();
    let config = StoreConfig::default();
    let store = FavoritesStore::load(Rc::new(prefs.clone()), &config);
    for id in ["a", "b", "c"] {
        store.add(Product::new(id, id.to_uppercase(), 1.0));
    }
    store.remove("a");
    store.add(Product::new("a", "A", 1.0));

    let reloaded = FavoritesStore::load(Rc::new(prefs), &config);
    assert_eq!(
        reloaded.ids(),
        vec![ProductId::from("b"), ProductId::from("c"), ProductId::from("a")]
    );
    assert_eq!(reloaded.to_array(), store.to_array());
}

#[test]
fn snapshot_is_stored_as_captured() {
    let prefs = MemoryPrefsStore::default();
    let config = StoreConfig::default();
    let store = FavoritesStore::load(Rc::new(prefs.clone()), &config);
    let mut captured = phone();
    captured
        .extra
        .insert("slug".to_string(), json!("phone-x"));
    store.add(captured.clone());

    let reloaded = FavoritesStore::load(Rc::new(prefs), &config);
    assert_eq!(reloaded.get("p1"), Some(captured));
}

#[test]
fn system_preference_with_dark_signal_then_toggle() {
    let prefs = MemoryPrefsStore::default();
    let (host, _source, applier) = memory_host(&prefs, ColorScheme::Dark);
    let stores = StorefrontStores::boot(&host, &StoreConfig::default());

    assert_eq!(stores.theme.preference(), ThemePreference::System);
    assert_eq!(stores.theme.effective_theme(), EffectiveTheme::Dark);
    assert_eq!(applier.last(), Some(EffectiveTheme::Dark));

    stores.theme.toggle_theme();
    assert_eq!(stores.theme.preference(), ThemePreference::Light);
    assert_eq!(stores.theme.effective_theme(), EffectiveTheme::Light);
    assert_eq!(applier.last(), Some(EffectiveTheme::Light));
}

#[test]
fn rehydrated_theme_is_applied_at_boot() {
    let prefs = MemoryPrefsStore::default();
    prefs.insert_raw("theme-storage", r#"{"state":{"theme":"dark"},"version":0}"#);
    let (host, _source, applier) = memory_host(&prefs, ColorScheme::Light);

    let stores = StorefrontStores::boot(&host, &StoreConfig::default());
    assert_eq!(stores.theme.preference(), ThemePreference::Dark);
    assert_eq!(applier.applied(), vec![EffectiveTheme::Dark]);
}

#[test]
fn os_scheme_change_realigns_presentation_under_system() {
    let prefs = MemoryPrefsStore::default();
    let (host, source, applier) = memory_host(&prefs, ColorScheme::Light);
    let stores = StorefrontStores::boot(&host, &StoreConfig::default());
    assert_eq!(applier.last(), Some(EffectiveTheme::Light));

    source.set(ColorScheme::Dark);
    assert_eq!(applier.last(), Some(EffectiveTheme::Dark));
    assert_eq!(stores.theme.effective_theme(), EffectiveTheme::Dark);
    assert_eq!(prefs.raw("theme-storage"), None);
}

#[test]
fn prefixed_slots_keep_storefronts_apart() {
    let prefs = MemoryPrefsStore::default();
    let eu = StoreConfig::with_key_prefix("eu");
    let us = StoreConfig::with_key_prefix("us");

    let eu_favorites = FavoritesStore::load(Rc::new(prefs.clone()), &eu);
    eu_favorites.add(phone());
    let eu_theme = ThemeStore::load(
        Rc::new(prefs.clone()),
        Rc::new(MemoryColorSchemeSource::default()),
        &eu,
    );
    eu_theme.set_theme(ThemePreference::Dark);

    let us_favorites = FavoritesStore::load(Rc::new(prefs.clone()), &us);
    let us_theme = ThemeStore::load(
        Rc::new(prefs),
        Rc::new(MemoryColorSchemeSource::default()),
        &us,
    );
    assert_eq!(us_favorites.count(), 0);
    assert_eq!(us_theme.preference(), ThemePreference::System);
}

#[test]
fn reset_isolates_consecutive_sessions() {
    let prefs = MemoryPrefsStore::default();
    let (host, _source, _applier) = memory_host(&prefs, ColorScheme::Light);
    let config = StoreConfig::default();

    let first = StorefrontStores::boot(&host, &config);
    first.favorites.add(phone());
    first.theme.set_theme(ThemePreference::Dark);
    first.favorites.reset();
    first.theme.reset();

    let second = StorefrontStores::boot(&host, &config);
    assert_eq!(second.favorites.count(), 0);
    assert_eq!(second.theme.preference(), ThemePreference::System);
}

#[test]
fn non_finite_price_does_not_cost_the_other_favorites() {
    let prefs = MemoryPrefsStore::default();
    let config = StoreConfig::default();
    let store = FavoritesStore::load(Rc::new(prefs.clone()), &config);
    store.add(phone());
    store.add(Product::new("p2", "Odd", f64::NAN));
    assert_eq!(store.count(), 2);

    let reloaded = FavoritesStore::load(Rc::new(prefs), &config);
    assert_eq!(reloaded.ids(), vec![ProductId::from("p1")]);
    assert_eq!(reloaded.get("p1"), Some(phone()));
}

#[test]
fn extra_named_like_a_typed_field_survives_reload() {
    let prefs = MemoryPrefsStore::default();
    let config = StoreConfig::default();
    let store = FavoritesStore::load(Rc::new(prefs.clone()), &config);
    let mut odd = Product::new("p2", "Odd", 5.0);
    odd.extra.insert("name".to_string(), json!("Shadow"));
    store.add(phone());
    store.add(odd);

    let reloaded = FavoritesStore::load(Rc::new(prefs), &config);
    assert_eq!(reloaded.count(), 2);
    assert_eq!(reloaded.get("p2").map(|p| p.name), Some("Odd".to_string()));
}
