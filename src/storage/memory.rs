//! In-process listing store.
//!
//! Holds the serialized collection as a string blob, the same shape the file
//! store keeps on disk, so corrupt payloads can be exercised without touching
//! the filesystem.

use crate::domain::error::{Result, SparesError};
use crate::domain::Listing;
use crate::storage::backend::{decode_listings, ListingStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryListingStore {
    raw: Option<String>,
}

impl MemoryListingStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: None }
    }

    /// Creates a store whose blob is `raw`, valid or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The stored blob, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ListingStore for MemoryListingStore {
    fn load_all(&self) -> Vec<Listing> {
        decode_listings(self.raw.as_deref())
    }

    fn save_all(&mut self, listings: &[Listing]) -> Result<()> {
        let json = serde_json::to_string(listings)
            .map_err(|e| SparesError::Storage(format!("failed to serialize listings: {e}")))?;
        self.raw = Some(json);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.raw = None;
        Ok(())
    }
}
