//! Application-wide constants
//!
//! Centralized location for magic strings that are used across
//! multiple modules.

/// Storage key holding the serialized favorites collection.
///
/// Matches the key used by earlier releases of the app, so data saved
/// before the rewrite keeps loading.
pub const FAVORITES_KEY: &str = "userFavorites";
