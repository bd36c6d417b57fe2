use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::constants::FAVORITES_KEY;
use crate::models::ListingItem;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// The id does not exist in the catalog. The action is ignored at
    /// the screen; nothing was mutated.
    #[error("unknown listing id: {id}")]
    UnknownListing { id: String },

    /// The backing store failed. The operation applied nothing, so a
    /// retry is safe.
    #[error("favorites storage unavailable: {source}")]
    StorageUnavailable {
        #[from]
        source: StorageError,
    },

    /// The persisted blob does not parse as a listing sequence. The
    /// in-memory view is left untouched; whether to reset to empty or
    /// surface the problem is the caller's policy.
    #[error("stored favorites are corrupt: {source}")]
    StorageCorrupt {
        #[from]
        source: serde_json::Error,
    },
}

/// The favorites synchronization point.
///
/// Owns both derivations of the persisted favorites collection: the
/// snapshot sequence stored as one JSON array under [`FAVORITES_KEY`],
/// and an id view readable synchronously from render paths. One instance
/// is shared by every screen; clones are cheap handles onto the same
/// state, so the feed and profile screens mutate through the same
/// critical section instead of racing their own read-modify-write
/// cycles against the store.
#[derive(Clone)]
pub struct FavoritesStore {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write cycles against the persisted blob.
    /// The backing store has no atomic RMW primitive of its own.
    op_lock: Mutex<()>,
    /// Ids of the currently favorited listings. Written only while
    /// `op_lock` is held.
    ids: RwLock<HashSet<String>>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                op_lock: Mutex::new(()),
                ids: RwLock::new(HashSet::new()),
            }),
        }
    }

    /// Read the persisted snapshot sequence. A missing key means "no
    /// favorites yet", not an error.
    async fn read_items(&self) -> Result<Vec<ListingItem>, FavoritesError> {
        match self.inner.storage.get(FAVORITES_KEY).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                warn!(error = %e, "favorites blob failed to parse");
                FavoritesError::StorageCorrupt { source: e }
            }),
        }
    }

    async fn write_items(&self, items: &[ListingItem]) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(items).map_err(|e| FavoritesError::StorageUnavailable {
            source: StorageError::Write {
                message: e.to_string(),
            },
        })?;
        self.inner.storage.set(FAVORITES_KEY, &raw).await?;
        Ok(())
    }

    /// Replace the id view with the ids of `items`. Called only after a
    /// completed read or write, so the view never diverges from the
    /// persisted sequence.
    fn sync_view(&self, items: &[ListingItem]) -> HashSet<String> {
        let ids: HashSet<String> = items.iter().map(|item| item.id.clone()).collect();
        *self.inner.ids.write() = ids.clone();
        ids
    }

    /// Load favorites from storage, replacing the id view. Returns the
    /// favorited ids.
    pub async fn load(&self) -> Result<HashSet<String>, FavoritesError> {
        let _guard = self.inner.op_lock.lock().await;
        let items = self.read_items().await?;
        Ok(self.sync_view(&items))
    }

    /// Lookup against the last-loaded id view.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.inner.ids.read().contains(id)
    }

    /// Snapshot of the current id view.
    pub fn favorite_ids(&self) -> HashSet<String> {
        self.inner.ids.read().clone()
    }

    /// Flip the favorite state of `id`.
    ///
    /// The branch is decided against the freshly read persisted
    /// sequence, not the possibly stale id view; read, modification and
    /// write-back happen as one unit under the store's lock. Adding
    /// resolves the listing through `lookup` and snapshots it by value.
    /// Returns whether the listing is a favorite after the call.
    pub async fn toggle<F>(&self, id: &str, lookup: F) -> Result<bool, FavoritesError>
    where
        F: Fn(&str) -> Option<ListingItem>,
    {
        let _guard = self.inner.op_lock.lock().await;
        let mut items = self.read_items().await?;

        let now_favorite = match items.iter().position(|item| item.id == id) {
            Some(idx) => {
                items.remove(idx);
                false
            }
            None => {
                let item = lookup(id).ok_or_else(|| FavoritesError::UnknownListing {
                    id: id.to_string(),
                })?;
                items.push(item);
                true
            }
        };

        self.write_items(&items).await?;
        self.sync_view(&items);
        debug!(id, now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    /// Remove `id` from favorites. Removing an id that is not favorited
    /// is a successful no-op and skips the write.
    pub async fn remove(&self, id: &str) -> Result<(), FavoritesError> {
        let _guard = self.inner.op_lock.lock().await;
        let mut items = self.read_items().await?;

        let Some(idx) = items.iter().position(|item| item.id == id) else {
            return Ok(());
        };
        items.remove(idx);

        self.write_items(&items).await?;
        self.sync_view(&items);
        debug!(id, "removed favorite");
        Ok(())
    }

    /// The full snapshot sequence, in the order the listings were
    /// favorited. Also refreshes the id view, so the two derivations of
    /// the persisted state agree after every completed read.
    pub async fn list_favorites(&self) -> Result<Vec<ListingItem>, FavoritesError> {
        let _guard = self.inner.op_lock.lock().await;
        let items = self.read_items().await?;
        self.sync_view(&items);
        Ok(items)
    }
}
