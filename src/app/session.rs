//! Session runtime binding application state to a listing store.
//!
//! The [`Session`] feeds events through [`handle_event`] and executes the
//! returned [`Action`]s against its [`ListingStore`]. Store failures are logged
//! and shown as a notice; they never abort the session.
//!
//! # Example
//!
//! ```
//! use spareshub::app::{Event, Session};
//! use spareshub::storage::{ListingStore, MemoryListingStore};
//! use spareshub::ui::Theme;
//!
//! let mut session = Session::new(MemoryListingStore::new(), Theme::default());
//! session.dispatch(&Event::ResetDemoData);
//!
//! assert_eq!(session.store().load_all(), session.state().listings);
//! ```

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::state::AppState;
use crate::domain::error::Result;
use crate::domain::MAX_PHOTOS;
use crate::sell::PhotoEncoder;
use crate::storage::ListingStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::path::PathBuf;

/// Application state together with the store it persists to.
#[derive(Debug)]
pub struct Session<S: ListingStore> {
    state: AppState,
    store: S,
}

impl<S: ListingStore> Session<S> {
    /// Loads the collection from `store` and starts at the era step.
    pub fn new(store: S, theme: Theme) -> Self {
        let listings = store.load_all();
        tracing::info!(count = listings.len(), "session started");

        Self {
            state: AppState::new(listings, theme),
            store,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn viewmodel(&self) -> UIViewModel {
        self.state.compute_viewmodel()
    }

    /// Handles one event and executes its store writes.
    ///
    /// Returns `true` if the screen needs redrawing.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let (mut render, actions) = handle_event(&mut self.state, event);

        for action in actions {
            if let Err(e) = self.execute(action) {
                tracing::error!(error = %e, "store write failed");
                self.state.notice = Some(format!("Could not save listings: {e}"));
                render = true;
            }
        }

        render
    }

    fn execute(&mut self, action: Action) -> Result<()> {
        match action {
            Action::AppendListing(listing) => {
                // The in-memory collection already holds the listing and any
                // earlier post whose write failed.
                tracing::debug!(listing_id = %listing.id, "persisting posted listing");
                self.store.save_all(&self.state.listings)?;
            }
            Action::ReplaceStore(listings) => {
                self.store.clear()?;
                self.store.save_all(&listings)?;
            }
        }
        Ok(())
    }

    /// Encodes photo files and attaches them to the sell draft.
    ///
    /// Only as many files as the draft has room for are read. Returns how many
    /// photos were attached.
    ///
    /// # Errors
    ///
    /// Returns the first encoding error; the draft is left unchanged in that case.
    pub async fn attach_photos<E>(&mut self, encoder: &E, paths: &[PathBuf]) -> Result<usize>
    where
        E: PhotoEncoder + ?Sized,
    {
        let room = MAX_PHOTOS.saturating_sub(self.state.draft.photos.len());
        let pending = paths.iter().take(room).map(|path| encoder.encode(path));
        let encoded = futures::future::try_join_all(pending).await?;

        let before = self.state.draft.photos.len();
        self.dispatch(&Event::PhotosEncoded(encoded));
        Ok(self.state.draft.photos.len() - before)
    }
}
