pub mod catalog;
pub mod config;
pub mod constants;
pub mod filter;
pub mod models;
pub mod storage;
pub mod store;

// Re-export the types screens work with at the crate root for convenience
pub use catalog::ListingCatalog;
pub use config::CoreConfig;
pub use filter::FilterCriteria;
pub use models::{ActorProfile, ListingItem, ProfileField};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::{FavoritesError, FavoritesStore, ResponseError, ResponseTracker};
