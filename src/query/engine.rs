//! Listing filter, search and sort.
//!
//! # Algorithm
//!
//! 1. **Selection filter**: every chosen funnel field must equal the listing's field
//! 2. **Text filter**: the trimmed, case-folded query must occur in title,
//!    description, make, model or category label
//! 3. **Sort**: newest first, or by price with ties kept in their original order
//! 4. **Price bounds**: min and max over the surviving listings, `0` when empty

use crate::app::funnel::Selection;
use crate::app::modes::SortMode;
use crate::domain::{fold_case, Listing};

/// Ordered listings matching a selection, with their price range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    pub listings: Vec<&'a Listing>,
    pub min_price: u32,
    pub max_price: u32,
}

impl QueryResult<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Returns `true` if the listing satisfies every chosen selection field.
///
/// The query and sort mode are ignored.
#[must_use]
pub fn matches_selection(listing: &Listing, selection: &Selection) -> bool {
    selection.era.map_or(true, |era| listing.era == era)
        && selection.make.as_ref().map_or(true, |make| &listing.make == make)
        && selection.model.as_ref().map_or(true, |model| &listing.model == model)
        && selection.category.map_or(true, |category| listing.category == category)
}

/// Runs the selection, query and sort of `selection` over `listings`.
///
/// # Examples
///
/// ```
/// use spareshub::app::funnel::Selection;
/// use spareshub::query::run_query;
/// use spareshub::storage::seed_listings;
///
/// let listings = seed_listings();
/// let selection = Selection { query: "SPEEDO".to_string(), ..Selection::default() };
/// let result = run_query(&listings, &selection);
///
/// assert_eq!(result.len(), 2);
/// assert_eq!((result.min_price, result.max_price), (495, 640));
/// ```
#[must_use]
pub fn run_query<'a>(listings: &'a [Listing], selection: &Selection) -> QueryResult<'a> {
    let _span = tracing::debug_span!("run_query",
        total_listings = listings.len(),
        query_len = selection.query.len(),
        step = ?selection.step,
        sort = ?selection.sort
    )
    .entered();

    let folded = fold_case(selection.trimmed_query());

    let mut matched: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches_selection(listing, selection))
        .filter(|listing| folded.is_empty() || listing.matches_text(&folded))
        .collect();

    let (min_price, max_price) = price_bounds(&matched);

    match selection.sort {
        SortMode::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::PriceAscending => matched.sort_by_key(|listing| listing.price),
        SortMode::PriceDescending => matched.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    tracing::debug!(matched = matched.len(), "query complete");

    QueryResult {
        listings: matched,
        min_price,
        max_price,
    }
}

fn price_bounds(listings: &[&Listing]) -> (u32, u32) {
    let min = listings.iter().map(|listing| listing.price).min();
    let max = listings.iter().map(|listing| listing.price).max();
    (min.unwrap_or(0), max.unwrap_or(0))
}
