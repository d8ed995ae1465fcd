//! JSON file-based listing store.
//!
//! The collection is kept as a single JSON array on disk and re-read on every
//! load, so the file is the only source of truth. Writes go to a temporary file
//! first and are renamed into place to avoid leaving a half-written array behind.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": "seed1",
//!     "created_at": 1716681600000,
//!     "era": "50_70",
//!     "make": "Jaguar",
//!     "model": "E-Type Series 1",
//!     "category": "electrical",
//!     "title": "Smiths speedometer (mph)",
//!     "condition": "Original",
//!     "price": 640,
//!     "location": "London",
//!     "postage_available": true,
//!     "photos": []
//!   }
//! ]
//! ```

use crate::domain::error::{Result, SparesError};
use crate::domain::Listing;
use crate::storage::backend::{decode_listings, ListingStore};
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// This type is `Send` but holds no lock: it is meant to be driven from a single
/// thread of control, like the rest of the session.
#[derive(Debug, Clone)]
pub struct JsonListingStore {
    file_path: PathBuf,
}

impl JsonListingStore {
    /// Opens a store backed by `file_path`, creating parent directories.
    ///
    /// The file itself is not created until the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON listing store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ListingStore for JsonListingStore {
    fn load_all(&self) -> Vec<Listing> {
        let _span = tracing::debug_span!("json_load_all", path = ?self.file_path).entered();

        let raw = match std::fs::read_to_string(&self.file_path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read listings file");
                None
            }
        };

        let listings = decode_listings(raw.as_deref());
        tracing::debug!(count = listings.len(), "listings loaded");
        listings
    }

    fn save_all(&mut self, listings: &[Listing]) -> Result<()> {
        let _span = tracing::debug_span!("json_save_all", count = listings.len()).entered();

        let json = serde_json::to_string_pretty(listings)
            .map_err(|e| SparesError::Storage(format!("failed to serialize listings: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("listings saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.file_path) {
            Ok(()) => {
                tracing::debug!("listings file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_listings;

    fn store_in(dir: &tempfile::TempDir) -> JsonListingStore {
        JsonListingStore::new(dir.path().join("data").join("listings.json")).unwrap()
    }

    #[test]
    fn missing_file_loads_seed_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load_all(), seed_listings());
    }

    #[test]
    fn corrupt_file_loads_seed_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.load_all(), seed_listings());

        std::fs::write(store.path(), r#"{"listings": []}"#).unwrap();
        assert_eq!(store.load_all(), seed_listings());
    }

    #[test]
    fn append_prepends_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let mut listing = seed_listings().remove(0);
        listing.id = "fresh".to_string();
        let all = store.append(listing).unwrap();

        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "fresh");
        assert_eq!(store.load_all(), all);
        assert!(!store.path().with_extension("tmp").exists());
    }

    #[test]
    fn empty_array_is_a_valid_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save_all(&[]).unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn clear_restores_seed_and_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.save_all(&[]).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load_all(), seed_listings());
    }
}
