//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the front end
//! changes application state. It applies the event to [`AppState`] and returns
//! whether the screen needs redrawing along with the store writes to perform.
//!
//! # Event Types
//!
//! - **Funnel**: `Funnel`, `PickTile`
//! - **Navigation**: `ShowBrowse`, `ShowSell`, `OpenListing`
//! - **Sell flow**: `EditDraft`, `PhotosEncoded`, `PostListing`
//! - **Listing page**: `MessageSeller`, `MakeOffer`
//! - **Demo data**: `ResetDemoData`
//!
//! Every event is total: an event that does not apply in the current state is
//! ignored and reports no redraw.
//!
//! # Example
//!
//! ```
//! use spareshub::app::{handle_event, AppState, Event};
//! use spareshub::app::modes::Step;
//! use spareshub::storage::seed_listings;
//! use spareshub::ui::Theme;
//!
//! let mut state = AppState::new(seed_listings(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::PickTile(1));
//!
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(state.selection.step, Step::Make);
//! ```

use crate::app::funnel::{reduce, FunnelAction, Selection};
use crate::app::modes::Route;
use crate::app::{Action, AppState};
use crate::query::tiles_for;
use crate::sell::DraftEdit;
use crate::storage::seed_listings;

const MESSAGE_SELLER_NOTICE: &str = "Messaging sellers is not available in this demo yet.";
const MAKE_OFFER_NOTICE: &str = "Making offers is not available in this demo yet.";

/// Discrete user actions delivered by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Applies a funnel transition to the browse selection.
    Funnel(FunnelAction),
    /// Picks the tile at this index on the current step.
    PickTile(usize),

    ShowBrowse,
    ShowSell,
    /// Opens the detail page of a listing by id.
    OpenListing(String),

    /// Changes one field of the sell draft.
    EditDraft(DraftEdit),
    /// Delivers encoded photos for the sell draft.
    PhotosEncoded(Vec<String>),
    /// Posts the sell draft if it passes the gate.
    PostListing,

    MessageSeller,
    MakeOffer,

    /// Restores the seed listings and resets browsing.
    ResetDemoData,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Any notice from a previous event is cleared first.
///
/// # Returns
///
/// A `(render, actions)` pair. `render` is `false` when the event left the
/// visible state untouched.
#[must_use]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let had_notice = state.notice.take().is_some();

    let (changed, actions) = match event {
        Event::Funnel(action) => (apply_funnel(state, action), vec![]),
        Event::PickTile(index) => {
            let tiles = tiles_for(&state.listings, &state.selection);
            match tiles.get(*index) {
                Some(tile) => {
                    tracing::debug!(tile = %tile.label, "tile picked");
                    let action = FunnelAction::Advance(tile.choice.clone());
                    (apply_funnel(state, &action), vec![])
                }
                None => {
                    tracing::debug!(index, available = tiles.len(), "no tile at index");
                    (false, vec![])
                }
            }
        }
        Event::ShowBrowse => (navigate(state, Route::Browse), vec![]),
        Event::ShowSell => (navigate(state, Route::Sell), vec![]),
        Event::OpenListing(id) => (navigate(state, Route::Listing(id.clone())), vec![]),
        Event::EditDraft(edit) => {
            let before = state.draft.clone();
            state.draft.apply(edit);
            (state.draft != before, vec![])
        }
        Event::PhotosEncoded(photos) => {
            let kept = state.draft.add_photos(photos.iter().cloned());
            if kept < photos.len() {
                tracing::debug!(kept, dropped = photos.len() - kept, "photo cap reached");
            }
            (kept > 0, vec![])
        }
        Event::PostListing => post_listing(state),
        Event::MessageSeller => {
            state.notice = Some(MESSAGE_SELLER_NOTICE.to_string());
            (true, vec![])
        }
        Event::MakeOffer => {
            state.notice = Some(MAKE_OFFER_NOTICE.to_string());
            (true, vec![])
        }
        Event::ResetDemoData => {
            let seed = seed_listings();
            tracing::info!(count = seed.len(), "resetting demo listings");

            state.listings.clone_from(&seed);
            state.selection = reduce(std::mem::take(&mut state.selection), &FunnelAction::Reset);
            state.route = Route::Browse;
            (true, vec![Action::ReplaceStore(seed)])
        }
    };

    (changed || had_notice, actions)
}

fn apply_funnel(state: &mut AppState, action: &FunnelAction) -> bool {
    let before: Selection = state.selection.clone();
    state.selection = reduce(std::mem::take(&mut state.selection), action);

    let changed = state.selection != before;
    if changed {
        tracing::trace!(step = ?state.selection.step, query = %state.selection.query, "selection updated");
    }
    changed
}

fn navigate(state: &mut AppState, route: Route) -> bool {
    if state.route == route {
        return false;
    }
    tracing::debug!(route = ?route, "navigating");
    state.route = route;
    true
}

fn post_listing(state: &mut AppState) -> (bool, Vec<Action>) {
    let id = uuid::Uuid::new_v4().simple().to_string();
    let created_at = state.next_created_at(chrono::Utc::now().timestamp_millis());

    let Some(listing) = state.draft.to_listing(id, created_at) else {
        tracing::debug!("draft does not pass the posting gate");
        return (false, vec![]);
    };

    tracing::info!(id = %listing.id, title = %listing.title, "listing posted");

    state.listings.insert(0, listing.clone());
    state.draft.reset_after_post();
    state.route = Route::Listing(listing.id.clone());

    (true, vec![Action::AppendListing(listing)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::funnel::Choice;
    use crate::app::modes::Step;
    use crate::domain::Era;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(seed_listings(), Theme::default())
    }

    #[test]
    fn pick_tile_advances_through_funnel() {
        let mut state = state();
        let _ = handle_event(&mut state, &Event::PickTile(1));
        assert_eq!(state.selection.era, Some(Era::Postwar));

        let (render, _) = handle_event(&mut state, &Event::PickTile(99));
        assert!(!render);
        assert_eq!(state.selection.step, Step::Make);
    }

    #[test]
    fn posting_blocked_draft_is_a_no_op() {
        let mut state = state();
        let _ = handle_event(&mut state, &Event::EditDraft(DraftEdit::Title("abc".to_string())));

        let (render, actions) = handle_event(&mut state, &Event::PostListing);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.listings.len(), 4);
    }

    #[test]
    fn posting_prepends_and_opens_listing() {
        let mut state = state();
        let _ = handle_event(&mut state, &Event::EditDraft(DraftEdit::Title("Lucas coil".to_string())));

        let (render, actions) = handle_event(&mut state, &Event::PostListing);
        assert!(render);

        let posted = state.listings[0].clone();
        assert_eq!(posted.title, "Lucas coil");
        assert_eq!(actions, vec![Action::AppendListing(posted.clone())]);
        assert_eq!(state.route, Route::Listing(posted.id));
        assert!(state.draft.title.is_empty());
        assert!(state.listings.iter().skip(1).all(|l| l.created_at < posted.created_at));
    }

    #[test]
    fn stub_actions_raise_notice_until_next_event() {
        let mut state = state();
        let _ = handle_event(&mut state, &Event::MessageSeller);
        assert!(state.notice.is_some());

        let (render, _) = handle_event(&mut state, &Event::ShowBrowse);
        assert!(render);
        assert!(state.notice.is_none());
    }

    #[test]
    fn reset_demo_data_restores_seed_and_funnel() {
        let mut state = state();
        let _ = handle_event(&mut state, &Event::Funnel(FunnelAction::Advance(Choice::Era(Era::Modern))));
        let _ = handle_event(&mut state, &Event::Funnel(FunnelAction::SetQuery("e30".to_string())));
        let _ = handle_event(&mut state, &Event::ShowSell);

        let (_, actions) = handle_event(&mut state, &Event::ResetDemoData);

        assert_eq!(actions, vec![Action::ReplaceStore(seed_listings())]);
        assert_eq!(state.listings, seed_listings());
        assert_eq!(state.selection, Selection::default());
        assert_eq!(state.route, Route::Browse);
    }

    #[test]
    fn photos_beyond_cap_are_dropped() {
        let mut state = state();
        let photos: Vec<String> = (0..8).map(|i| format!("data:{i}")).collect();
        let _ = handle_event(&mut state, &Event::PhotosEncoded(photos));
        assert_eq!(state.draft.photos.len(), 6);

        let (render, _) = handle_event(&mut state, &Event::PhotosEncoded(vec!["x".to_string()]));
        assert!(!render);
    }
}
