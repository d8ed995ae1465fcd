//! Presentation of browse, listing and sell pages.
//!
//! Pure functions from domain state to view models. Nothing here caches: each
//! call recomputes from `(listings, selection)` so the output always reflects
//! the current state.
//!
//! # Instant Matches
//!
//! Outside the era step, the instant-match panel appears whenever a query is
//! typed or the results step is active. Its counts and price range cover the
//! whole result set while only the first [`PREVIEW_LIMIT`] listings are listed.

use crate::app::funnel::{FunnelAction, Selection};
use crate::app::modes::{FunnelField, Step};
use crate::domain::catalog::{self, OTHER_UNKNOWN};
use crate::domain::{fold_char, Listing, MAX_PHOTOS};
use crate::query::{run_query, tiles_for};
use crate::sell::SellDraft;
use crate::ui::viewmodel::{
    Breadcrumb, BrowseView, EmptyState, InstantMatches, ListingCard, ListingView, ResultsView,
    SearchBarInfo, SellView, TileView,
};

/// Listings shown in the instant-match preview.
pub const PREVIEW_LIMIT: usize = 6;

/// Returns `true` if the instant-match panel should be shown.
#[must_use]
pub fn should_show_instant_matches(selection: &Selection) -> bool {
    match selection.step {
        Step::Era => false,
        Step::Results => true,
        Step::Make | Step::Model | Step::Category => !selection.trimmed_query().is_empty(),
    }
}

/// Title of the instant-match panel for the current selection.
///
/// Past the make step a missing make reads as "Any make".
#[must_use]
pub fn instant_matches_title(selection: &Selection) -> String {
    let mut title = String::from("Matches in ");
    title.push_str(selection.era.map_or("any era", |era| era.label()));

    match selection.make.as_deref() {
        Some(make) => {
            title.push_str(" • ");
            title.push_str(make);
        }
        None if selection.step > Step::Make => title.push_str(" • Any make"),
        None => {}
    }
    if let Some(model) = selection.model.as_deref() {
        title.push_str(" • ");
        title.push_str(model);
    }
    if let Some(category) = selection.category {
        title.push_str(" • ");
        title.push_str(category.label());
    }
    title
}

/// Formats a whole-pound price with thousands separators, e.g. `£1,234`.
#[must_use]
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("£{grouped}")
}

/// Formats a price range, e.g. `£220–£640`.
#[must_use]
pub fn format_price_range(min: u32, max: u32) -> String {
    format!("{}–{}", format_price(min), format_price(max))
}

/// Character ranges of `text` containing the case-folded `query`.
///
/// Matches do not overlap. Returns nothing for a blank query.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().map(fold_char).collect();
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().map(fold_char).collect();
    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Builds the card for one listing.
#[must_use]
pub fn listing_card(listing: &Listing, query: &str) -> ListingCard {
    ListingCard {
        id: listing.id.clone(),
        title: listing.title.clone(),
        vehicle: format!("{} • {}", listing.make, listing.model),
        category: listing.category.label(),
        condition: listing.condition.label(),
        price: format_price(listing.price),
        location: listing.location.clone(),
        highlight_ranges: highlight_ranges(&listing.title, query),
    }
}

/// Breadcrumb chips for every chosen field, in funnel order.
#[must_use]
pub fn breadcrumbs(selection: &Selection) -> Vec<Breadcrumb> {
    let chip = |field: FunnelField, value: String| Breadcrumb {
        field,
        value,
        clear: FunnelAction::ClearField(field),
    };

    let mut chips = Vec::new();
    if let Some(era) = selection.era {
        chips.push(chip(FunnelField::Era, era.label().to_string()));
    }
    if let Some(make) = &selection.make {
        chips.push(chip(FunnelField::Make, make.clone()));
    }
    if let Some(model) = &selection.model {
        chips.push(chip(FunnelField::Model, model.clone()));
    }
    if let Some(category) = selection.category {
        chips.push(chip(FunnelField::Category, category.label().to_string()));
    }
    chips
}

/// Computes the browse page for a selection.
#[must_use]
pub fn present_browse(listings: &[Listing], selection: &Selection) -> BrowseView {
    let _span = tracing::debug_span!("present_browse", step = ?selection.step).entered();

    let tiles = tiles_for(listings, selection)
        .into_iter()
        .map(|tile| TileView {
            label: tile.label,
            meta: tile.meta,
            listing_count: tile.listing_count,
        })
        .collect();

    let search_bar = (selection.step != Step::Era).then(|| SearchBarInfo {
        query: selection.query.clone(),
        placeholder: selection.step.search_placeholder(),
    });

    let show_instant = should_show_instant_matches(selection);
    let at_results = selection.step == Step::Results;

    let (instant_matches, results) = if show_instant {
        let result = run_query(listings, selection);
        let query = selection.trimmed_query();

        let instant = InstantMatches {
            title: instant_matches_title(selection),
            items: result
                .listings
                .iter()
                .take(PREVIEW_LIMIT)
                .map(|listing| listing_card(listing, query))
                .collect(),
            total: result.len(),
            min_price: result.min_price,
            max_price: result.max_price,
            show_view_all: !at_results,
        };

        let results = at_results.then(|| ResultsView {
            items: result
                .listings
                .iter()
                .map(|listing| listing_card(listing, query))
                .collect(),
            count: result.len(),
            min_price: result.min_price,
            max_price: result.max_price,
            sort: selection.sort,
            empty_state: result.is_empty().then(|| EmptyState {
                message: "No matches".to_string(),
                subtitle: "Try a different keyword, or clear a filter.".to_string(),
            }),
        });

        (Some(instant), results)
    } else {
        (None, None)
    };

    BrowseView {
        step: selection.step,
        heading: selection.step.heading(),
        breadcrumbs: breadcrumbs(selection),
        search_bar,
        tiles,
        instant_matches,
        results,
    }
}

/// Computes the detail page of a listing.
#[must_use]
pub fn present_listing(listing: &Listing) -> ListingView {
    ListingView {
        id: listing.id.clone(),
        title: listing.title.clone(),
        vehicle: format!("{} • {} • {}", listing.era.label(), listing.make, listing.model),
        category: listing.category.label(),
        condition: listing.condition.label(),
        postage: listing.postage_label(),
        posted_on: listing.posted_on(),
        price: format_price(listing.price),
        location: listing.location.clone(),
        description: listing.description.clone(),
        photo_count: listing.photos.len(),
    }
}

/// The page shown for a listing id that does not exist.
#[must_use]
pub fn listing_not_found() -> EmptyState {
    EmptyState {
        message: "Listing not found".to_string(),
        subtitle: "It may have been removed. Go back to browsing.".to_string(),
    }
}

/// Computes the sell form.
#[must_use]
pub fn present_sell(draft: &SellDraft) -> SellView {
    let with_other = |mut names: Vec<String>| {
        names.push(OTHER_UNKNOWN.to_string());
        names
    };

    SellView {
        era: draft.era.label(),
        make: draft.make.clone(),
        model: draft.model.clone(),
        category: draft.category.label(),
        title: draft.title.clone(),
        description: draft.description.clone(),
        condition: draft.condition.label(),
        price: format_price(draft.price),
        location: draft.location.clone(),
        postage: draft.postage_available,
        photo_count: draft.photos.len(),
        max_photos: MAX_PHOTOS,
        makes: with_other(
            catalog::makes_for(draft.era)
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        models: with_other(
            catalog::models_for(draft.era, &draft.make)
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        can_post: draft.can_post(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::funnel::{reduce, Choice};
    use crate::domain::{Category, Era};
    use crate::storage::seed_listings;

    fn select(actions: &[FunnelAction]) -> Selection {
        actions
            .iter()
            .fold(Selection::default(), |selection, action| reduce(selection, action))
    }

    fn jaguar_postwar() -> Vec<FunnelAction> {
        vec![
            FunnelAction::Advance(Choice::Era(Era::Postwar)),
            FunnelAction::Advance(Choice::Make("Jaguar".to_string())),
        ]
    }

    #[test]
    fn highlight_positions_match_search_folding() {
        let mut listing = crate::storage::seed_listings().remove(0);
        listing.title = "İgnition coil, İGNITER".to_string();

        let query = "ign";
        assert!(listing.matches_text(&crate::domain::fold_case(query)));
        assert_eq!(highlight_ranges(&listing.title, query), vec![(0, 3), (15, 18)]);
    }

    #[test]
    fn panel_hidden_on_era_step_even_with_query() {
        let selection = Selection {
            query: "speedo".to_string(),
            ..Selection::default()
        };
        assert!(!should_show_instant_matches(&selection));
    }

    #[test]
    fn panel_needs_query_before_results() {
        let mut actions = jaguar_postwar();
        assert!(!should_show_instant_matches(&select(&actions)));

        actions.push(FunnelAction::SetQuery("   ".to_string()));
        assert!(!should_show_instant_matches(&select(&actions)));

        actions.push(FunnelAction::OpenResults);
        assert!(should_show_instant_matches(&select(&actions)));
    }

    #[test]
    fn titles_follow_selection() {
        let at_make = select(&[FunnelAction::Advance(Choice::Era(Era::Postwar))]);
        assert_eq!(instant_matches_title(&at_make), "Matches in 1950–1970");

        let at_model = select(&jaguar_postwar());
        assert_eq!(instant_matches_title(&at_model), "Matches in 1950–1970 • Jaguar");

        let any_make = Selection {
            era: Some(Era::Modern),
            category: Some(Category::Suspension),
            step: Step::Results,
            ..Selection::default()
        };
        assert_eq!(
            instant_matches_title(&any_make),
            "Matches in 1980–2000 • Any make • Suspension & Steering"
        );
    }

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price(0), "£0");
        assert_eq!(format_price(640), "£640");
        assert_eq!(format_price(1234), "£1,234");
        assert_eq!(format_price(1_234_567), "£1,234,567");
        assert_eq!(format_price_range(220, 1500), "£220–£1,500");
    }

    #[test]
    fn highlights_are_case_insensitive_character_ranges() {
        assert_eq!(highlight_ranges("Smiths speedometer", "SPEEDO"), vec![(7, 13)]);
        assert_eq!(highlight_ranges("£ab ab", "ab"), vec![(1, 3), (4, 6)]);
        assert!(highlight_ranges("anything", "  ").is_empty());
    }

    #[test]
    fn preview_is_capped_but_totals_are_not() {
        let mut listings = Vec::new();
        for i in 0..9 {
            let mut listing = seed_listings().remove(1);
            listing.id = format!("x{i}");
            listing.price = 100 + i;
            listings.push(listing);
        }
        let mut actions = jaguar_postwar();
        actions.push(FunnelAction::SetQuery("speedo".to_string()));

        let view = present_browse(&listings, &select(&actions));
        let instant = view.instant_matches.unwrap();

        assert_eq!(instant.items.len(), PREVIEW_LIMIT);
        assert_eq!(instant.total, 9);
        assert_eq!((instant.min_price, instant.max_price), (100, 108));
        assert_eq!(instant.showing_note().as_deref(), Some("Showing 6 of 9"));
        assert!(instant.show_view_all);
        assert!(view.results.is_none());
    }

    #[test]
    fn results_step_carries_full_payload() {
        let mut actions = jaguar_postwar();
        actions.push(FunnelAction::OpenResults);
        let view = present_browse(&seed_listings(), &select(&actions));

        let results = view.results.unwrap();
        assert_eq!(results.count, 2);
        assert_eq!(results.items[0].id, "seed2");
        assert!(results.empty_state.is_none());
        assert!(view.tiles.is_empty());
        assert!(!view.instant_matches.unwrap().show_view_all);
    }

    #[test]
    fn breadcrumbs_clear_their_own_field() {
        let chips = breadcrumbs(&select(&jaguar_postwar()));
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].value, "1950–1970");
        assert_eq!(chips[1].clear, FunnelAction::ClearField(FunnelField::Make));
    }

    #[test]
    fn sell_form_offers_other_unknown() {
        let view = present_sell(&SellDraft::default());
        assert_eq!(view.makes.last().map(String::as_str), Some(OTHER_UNKNOWN));
        assert!(view.models.contains(&"XK140".to_string()));
        assert!(!view.can_post);
        assert_eq!(view.price, "£250");
    }
}
