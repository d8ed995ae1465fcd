//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready strings and counts and no business logic, so any front end can
//! draw them.

use crate::app::funnel::FunnelAction;
use crate::app::modes::{FunnelField, SortMode, Step};

/// Complete UI view model for one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub page: PageView,
    /// Benign message from the last event, such as a stubbed action.
    pub notice: Option<String>,
    pub footer: FooterInfo,
}

/// Body of the screen for the active route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Browse(BrowseView),
    Sell(SellView),
    Listing(ListingView),
    /// A listing id that is not in the collection.
    NotFound(EmptyState),
}

/// The funnel page: breadcrumbs, tiles, instant matches and results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    pub step: Step,
    pub heading: &'static str,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Absent on the era step, which has no search box.
    pub search_bar: Option<SearchBarInfo>,
    pub tiles: Vec<TileView>,
    pub instant_matches: Option<InstantMatches>,
    /// Full result list, present only on the results step.
    pub results: Option<ResultsView>,
}

/// A chip for one chosen selection field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub field: FunnelField,
    pub value: String,
    /// Transition to dispatch when the chip is cleared.
    pub clear: FunnelAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub label: String,
    pub meta: String,
    pub listing_count: usize,
}

/// Bounded preview of query results shown alongside the tiles.
///
/// `total`, `min_price` and `max_price` always describe the full result set;
/// `items` holds at most the preview limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantMatches {
    pub title: String,
    pub items: Vec<ListingCard>,
    pub total: usize,
    pub min_price: u32,
    pub max_price: u32,
    /// Whether to offer the jump to the full results step.
    pub show_view_all: bool,
}

impl InstantMatches {
    /// "Showing K of N" when the preview is truncated.
    #[must_use]
    pub fn showing_note(&self) -> Option<String> {
        (self.total > self.items.len())
            .then(|| format!("Showing {} of {}", self.items.len(), self.total))
    }
}

/// Full result payload for the results step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub items: Vec<ListingCard>,
    pub count: usize,
    pub min_price: u32,
    pub max_price: u32,
    pub sort: SortMode,
    pub empty_state: Option<EmptyState>,
}

/// One listing row in a preview or result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    /// "make • model".
    pub vehicle: String,
    pub category: &'static str,
    pub condition: &'static str,
    pub price: String,
    pub location: String,
    /// Character ranges of the title matching the query, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail page of a single listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub id: String,
    pub title: String,
    /// "era label • make • model".
    pub vehicle: String,
    pub category: &'static str,
    pub condition: &'static str,
    pub postage: &'static str,
    pub posted_on: String,
    pub price: String,
    pub location: String,
    pub description: Option<String>,
    pub photo_count: usize,
}

/// The sell form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellView {
    pub era: &'static str,
    pub make: String,
    pub model: String,
    pub category: &'static str,
    pub title: String,
    pub description: String,
    pub condition: &'static str,
    pub price: String,
    pub location: String,
    pub postage: bool,
    pub photo_count: usize,
    pub max_photos: usize,
    /// Makes offered for the draft's era, ending with "Other / Unknown".
    pub makes: Vec<String>,
    /// Models offered for the draft's make, ending with "Other / Unknown".
    pub models: Vec<String>,
    /// The post button is disabled when `false`.
    pub can_post: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the current page.
    pub keybindings: String,
}

/// Message shown in place of missing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: &'static str,
}
