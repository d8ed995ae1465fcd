//! Side effects produced by the event handler.
//!
//! The handler mutates [`AppState`](crate::app::AppState) in place and returns
//! [`Action`]s for everything that touches the listing store. The
//! [`Session`](crate::app::Session) executes them in order after each event.

use crate::domain::Listing;

/// Store writes requested by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Persists the in-memory collection after a listing was posted.
    ///
    /// The whole collection is written so an earlier post whose write failed
    /// is stored too.
    AppendListing(Listing),

    /// Clears the store and writes the given collection in its place.
    ///
    /// Used by the demo-data reset, which must leave the store holding exactly
    /// the seed set.
    ReplaceStore(Vec<Listing>),
}
