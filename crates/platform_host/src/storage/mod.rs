//! Storage contracts shared by browser adapters and the storefront stores.

pub mod prefs;
