//! Text codec for persisted store slots.
//!
//! Both slots use a versioned envelope, `{"state": {...}, "version": N}`. The favorites map is
//! written as a JSON object whose key order is the map's insertion order, and decoding rebuilds
//! the map in the object's key order. Each favorites entry is decoded on its own, so one
//! unreadable snapshot costs only that entry.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{FavoritesState, Product, ProductId, ThemePreference, ThemeState};

/// Schema version written into, and required from, every persisted envelope.
pub const PERSIST_SCHEMA_VERSION: u32 = 0;

#[derive(Debug, Error)]
/// Failures while encoding or decoding a persisted slot.
pub enum CodecError {
    /// The text is not valid JSON or does not have the expected shape.
    #[error("invalid persisted payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The envelope was written by an incompatible schema.
    #[error("unsupported persisted schema version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the envelope.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },
}

#[derive(Serialize)]
struct EnvelopeRef<'a, S> {
    state: &'a S,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<S> {
    state: S,
    version: u32,
}

#[derive(Deserialize)]
struct FavoritesSlot {
    favorites: IndexMap<ProductId, serde_json::Value>,
}

#[derive(Serialize)]
struct FavoritesSlotRef<'a> {
    favorites: IndexMap<&'a ProductId, Cow<'a, Product>>,
}

/// Favorites read back from a slot, with the entries that could not be decoded.
#[derive(Debug)]
pub struct DecodedFavorites {
    pub state: FavoritesState,
    /// Entries dropped because their snapshot did not decode.
    pub skipped: Vec<(ProductId, CodecError)>,
}

/// Drops `extra` keys that would repeat a typed field once flattened.
fn writable_snapshot(product: &Product) -> Cow<'_, Product> {
    if !Product::FIELD_NAMES
        .iter()
        .any(|name| product.extra.contains_key(*name))
    {
        return Cow::Borrowed(product);
    }
    let mut owned = product.clone();
    owned
        .extra
        .retain(|key, _| !Product::FIELD_NAMES.iter().any(|name| *name == key.as_str()));
    Cow::Owned(owned)
}

#[derive(Serialize, Deserialize)]
struct ThemeSlot {
    theme: ThemePreference,
}

fn encode<S: Serialize>(state: &S) -> Result<String, CodecError> {
    let envelope = EnvelopeRef {
        state,
        version: PERSIST_SCHEMA_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

fn decode<S: for<'de> Deserialize<'de>>(raw: &str) -> Result<S, CodecError> {
    let envelope: Envelope<S> = serde_json::from_str(raw)?;
    if envelope.version != PERSIST_SCHEMA_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: envelope.version,
            expected: PERSIST_SCHEMA_VERSION,
        });
    }
    Ok(envelope.state)
}

/// Encodes favorites into the persisted envelope text.
///
/// # Errors
///
/// Returns an error when a snapshot cannot be serialized.
pub fn serialize_favorites(state: &FavoritesState) -> Result<String, CodecError> {
    encode(&FavoritesSlotRef {
        favorites: state
            .favorites
            .iter()
            .map(|(id, product)| (id, writable_snapshot(product)))
            .collect(),
    })
}

/// Decodes favorites from persisted envelope text.
///
/// Entries whose snapshot does not decode (a `null` price written for a non-finite number, a
/// missing required field) are reported in [`DecodedFavorites::skipped`] and the rest are kept.
///
/// # Errors
///
/// Returns an error for invalid JSON, an envelope or map of the wrong shape, or an unsupported
/// version.
pub fn decode_favorites(raw: &str) -> Result<DecodedFavorites, CodecError> {
    let slot: FavoritesSlot = decode(raw)?;
    let mut decoded = DecodedFavorites {
        state: FavoritesState::default(),
        skipped: Vec::new(),
    };
    for (id, value) in slot.favorites {
        match serde_json::from_value::<Product>(value) {
            Ok(mut product) => {
                // The slot key is authoritative over the embedded snapshot id.
                if product.id != id {
                    product.id = id.clone();
                }
                decoded.state.favorites.insert(id, product);
            }
            Err(err) => decoded.skipped.push((id, CodecError::Json(err))),
        }
    }
    Ok(decoded)
}

/// Decodes favorites, treating a slot-level failure as an absent slot and dropping unreadable
/// entries.
pub fn deserialize_favorites(raw: &str) -> Option<FavoritesState> {
    decode_favorites(raw).ok().map(|decoded| decoded.state)
}

/// Encodes the theme preference into the persisted envelope text.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn serialize_theme(state: &ThemeState) -> Result<String, CodecError> {
    encode(&ThemeSlot { theme: state.theme })
}

/// Decodes the theme preference from persisted envelope text.
///
/// # Errors
///
/// Returns an error for invalid JSON, an unknown variant, or an unsupported version.
pub fn decode_theme(raw: &str) -> Result<ThemeState, CodecError> {
    let slot: ThemeSlot = decode(raw)?;
    Ok(ThemeState { theme: slot.theme })
}

/// Decodes the theme preference, treating every failure as an absent slot.
pub fn deserialize_theme(raw: &str) -> Option<ThemeState> {
    decode_theme(raw).ok()
}
