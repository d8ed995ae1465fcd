//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the front end shows: the
//! listing collection as last loaded from the store, the browse selection, the
//! active route, the sell draft and any pending notice. It is mutated only by
//! [`handle_event`](crate::app::handle_event) and read by
//! [`compute_viewmodel`](AppState::compute_viewmodel).
//!
//! # Example
//!
//! ```
//! use spareshub::app::AppState;
//! use spareshub::storage::seed_listings;
//! use spareshub::ui::{PageView, Theme};
//!
//! let state = AppState::new(seed_listings(), Theme::default());
//! let viewmodel = state.compute_viewmodel();
//!
//! assert!(matches!(viewmodel.page, PageView::Browse(_)));
//! ```

use super::funnel::Selection;
use super::modes::{Route, Step};
use crate::domain::Listing;
use crate::query::{run_query, tiles_for, QueryResult, Tile};
use crate::sell::SellDraft;
use crate::ui::presenter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, PageView, UIViewModel};

const APP_TITLE: &str = "Spares Hub";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing collection, newest first as stored.
    pub listings: Vec<Listing>,

    /// Browse funnel position, query and sort.
    pub selection: Selection,

    pub route: Route,

    /// Sell form values. Kept across route changes so a half-written listing
    /// survives a detour to the browse page.
    pub draft: SellDraft,

    /// Benign message raised by the last event, cleared by the next one.
    pub notice: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a browsing state over `listings` at the era step.
    #[must_use]
    pub fn new(listings: Vec<Listing>, theme: Theme) -> Self {
        Self {
            listings,
            selection: Selection::default(),
            route: Route::default(),
            draft: SellDraft::default(),
            notice: None,
            theme,
        }
    }

    /// Runs the current selection against the collection.
    #[must_use]
    pub fn query(&self) -> QueryResult<'_> {
        run_query(&self.listings, &self.selection)
    }

    /// Tiles for the current funnel step.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        tiles_for(&self.listings, &self.selection)
    }

    #[must_use]
    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Creation timestamp for a new listing.
    ///
    /// Never earlier than one millisecond after the newest existing listing, so
    /// the newest-first order matches posting order even if the clock steps back.
    #[must_use]
    pub fn next_created_at(&self, now_ms: i64) -> i64 {
        self.listings
            .iter()
            .map(|listing| listing.created_at.saturating_add(1))
            .max()
            .map_or(now_ms, |floor| floor.max(now_ms))
    }

    /// Computes the view model for the active route.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let page = match &self.route {
            Route::Browse => PageView::Browse(presenter::present_browse(&self.listings, &self.selection)),
            Route::Sell => PageView::Sell(presenter::present_sell(&self.draft)),
            Route::Listing(id) => self.listing(id).map_or_else(
                || PageView::NotFound(presenter::listing_not_found()),
                |listing| PageView::Listing(presenter::present_listing(listing)),
            ),
        };

        UIViewModel {
            header: self.compute_header(),
            page,
            notice: self.notice.clone(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match &self.route {
            Route::Browse => self.selection.step.heading(),
            Route::Sell => "Sell a part",
            Route::Listing(_) => "Listing",
        };
        HeaderInfo {
            title: format!(" {APP_TITLE} ({}) ", self.listings.len()),
            subtitle: subtitle.to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.route, self.selection.step) {
            (Route::Browse, Step::Era) => "<n>: choose  sell: post a part  demo-reset  quit",
            (Route::Browse, Step::Make) => {
                "<n>: choose  search <text>  continue  results  back  crumb <field>  reset  quit"
            }
            (Route::Browse, Step::Model) => {
                "<n>: choose  skip  search <text>  results  back  crumb <field>  reset  quit"
            }
            (Route::Browse, Step::Category) => {
                "<n>: choose  search <text>  results  back  crumb <field>  reset  quit"
            }
            (Route::Browse, Step::Results) => {
                "open <n>  search <text>  sort newest|low|high  back  crumb <field>  reset  quit"
            }
            (Route::Sell, _) => "set <field> <value>  photo <paths>  rmphoto <n>  clear  post  browse",
            (Route::Listing(_), _) => "message  offer  browse  sell",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
