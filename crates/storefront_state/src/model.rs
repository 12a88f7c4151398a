use std::{borrow::Borrow, fmt};

use indexmap::IndexMap;
use platform_host::{ColorScheme, EffectiveTheme};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Product snapshot captured when a shopper favorites it.
///
/// Fields the service layer sends beyond the typed ones are kept in `extra` so a snapshot
/// survives a persistence round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Wire names of the typed fields. An `extra` key with one of these names would be written
    /// twice when flattened, so the codec drops it.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "id", "name", "price", "currency", "images", "category", "inStock", "rating",
    ];

    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            currency: "USD".to_string(),
            images: Vec::new(),
            category: String::new(),
            in_stock: true,
            rating: None,
            extra: Map::new(),
        }
    }
}

/// Favorited products keyed by id, iterated in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub favorites: IndexMap<ProductId, Product>,
}

impl FavoritesState {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.favorites.get(id)
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    pub fn to_array(&self) -> Vec<Product> {
        self.favorites.values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.favorites.keys().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolves the preference to a concrete theme. `system` follows `system_theme`.
    pub const fn resolve(self, system_theme: EffectiveTheme) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::System => system_theme,
        }
    }
}

impl From<EffectiveTheme> for ThemePreference {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::Light,
            EffectiveTheme::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: ThemePreference,
}

impl ThemeState {
    pub fn effective(&self, scheme: ColorScheme, fallback: EffectiveTheme) -> EffectiveTheme {
        self.theme.resolve(scheme.resolve(fallback))
    }
}

/// Payload delivered to theme listeners after every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    pub preference: ThemePreference,
    pub effective: EffectiveTheme,
}
