pub mod favorites;
pub mod responses;

pub use favorites::{FavoritesError, FavoritesStore};
pub use responses::{ResponseError, ResponseTracker};
