//! Listing store abstraction.
//!
//! The core reads and writes listings only through [`ListingStore`]. The trait
//! mirrors a key-value blob holding the whole collection: load everything,
//! replace everything, prepend one, or clear.

use crate::domain::error::Result;
use crate::domain::Listing;
use crate::storage::seed::seed_listings;

/// Persistent holder of the ordered listing collection.
///
/// # Implementations
///
/// - [`JsonListingStore`](crate::storage::JsonListingStore): JSON file with atomic writes
/// - [`MemoryListingStore`](crate::storage::MemoryListingStore): in-process blob, used in tests
pub trait ListingStore: Send {
    /// Loads the whole collection, newest first.
    ///
    /// Never fails: missing or unreadable data yields the seed set.
    fn load_all(&self) -> Vec<Listing>;

    /// Replaces the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    fn save_all(&mut self, listings: &[Listing]) -> Result<()>;

    /// Removes the stored collection. The next [`load_all`](Self::load_all)
    /// returns the seed set.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be removed.
    fn clear(&mut self) -> Result<()>;

    /// Prepends a listing and returns the new collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated collection cannot be written.
    fn append(&mut self, listing: Listing) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("store_append", listing_id = %listing.id).entered();

        let mut listings = self.load_all();
        listings.insert(0, listing);
        self.save_all(&listings)?;

        tracing::debug!(count = listings.len(), "listing appended");
        Ok(listings)
    }
}

/// Decodes a stored blob, falling back to the seed set.
///
/// Absent data, malformed JSON, a payload that is not an array, or array
/// entries that are not listings all count as corrupt.
#[must_use]
pub fn decode_listings(raw: Option<&str>) -> Vec<Listing> {
    let Some(raw) = raw else {
        tracing::debug!("no stored listings, using seed set");
        return seed_listings();
    };

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "stored listings are not valid JSON, using seed set");
            return seed_listings();
        }
    };

    if !value.is_array() {
        tracing::warn!("stored listings payload is not an array, using seed set");
        return seed_listings();
    }

    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored listings have unexpected shape, using seed set");
        seed_listings()
    })
}
