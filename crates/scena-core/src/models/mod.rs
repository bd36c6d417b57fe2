pub mod listing;
pub mod profile;

pub use listing::ListingItem;
pub use profile::{ActorProfile, MediaKind, PortfolioEntry, ProfileField};
