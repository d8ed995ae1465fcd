//! Navigable choices for each funnel step.
//!
//! Tiles come from the catalog, not from listings: every make of the chosen era
//! is offered even if nothing is for sale yet. When a query is present the tiles
//! are narrowed by case-insensitive substring match against the tile label only.
//! Each tile also carries the number of listings it would lead to, computed with
//! the same selection filter the query engine uses.

use super::engine::matches_selection;
use crate::app::funnel::{Choice, Selection};
use crate::app::modes::Step;
use crate::domain::catalog::{self, Category, Era, OTHER_UNKNOWN};
use crate::domain::Listing;

/// A selectable option on the era, make, model or category step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: String,
    pub meta: String,
    /// Choice dispatched when the tile is picked.
    pub choice: Choice,
    /// Listings reachable through this tile, ignoring the query.
    pub listing_count: usize,
}

/// Computes the tile set for the current step.
///
/// The results step has no tiles. Make and model tile sets always end with an
/// [`OTHER_UNKNOWN`] tile, which is never filtered out by the query.
#[must_use]
pub fn tiles_for(listings: &[Listing], selection: &Selection) -> Vec<Tile> {
    let folded = selection.trimmed_query().to_lowercase();
    let label_matches = |label: &str| folded.is_empty() || label.to_lowercase().contains(&folded);

    let count = |choice: &Choice| {
        let mut narrowed = selection.clone();
        match choice {
            Choice::Era(era) => narrowed.era = Some(*era),
            Choice::Make(make) => narrowed.make = Some(make.clone()),
            Choice::Model(model) => narrowed.model = Some(model.clone()),
            Choice::Category(category) => narrowed.category = Some(*category),
        }
        listings
            .iter()
            .filter(|listing| matches_selection(listing, &narrowed))
            .count()
    };

    let tile = |label: &str, meta: String, choice: Choice| Tile {
        label: label.to_string(),
        meta,
        listing_count: count(&choice),
        choice,
    };

    match selection.step {
        Step::Era => Era::ALL
            .into_iter()
            .map(|era| {
                tile(
                    era.label(),
                    format!("{} • {}", era.meta(), era.years()),
                    Choice::Era(era),
                )
            })
            .collect(),
        Step::Make => {
            let Some(era) = selection.era else {
                return vec![];
            };
            let mut tiles: Vec<Tile> = catalog::makes_for(era)
                .into_iter()
                .filter(|make| label_matches(make))
                .map(|make| tile(make, "Tap to choose".to_string(), Choice::Make(make.to_string())))
                .collect();
            tiles.push(tile(
                OTHER_UNKNOWN,
                "If your make isn't listed".to_string(),
                Choice::Make(OTHER_UNKNOWN.to_string()),
            ));
            tiles
        }
        Step::Model => {
            let (Some(era), Some(make)) = (selection.era, selection.make.as_deref()) else {
                return vec![];
            };
            let mut tiles: Vec<Tile> = catalog::models_for(era, make)
                .into_iter()
                .filter(|model| label_matches(model))
                .map(|model| tile(model, "Tap to choose".to_string(), Choice::Model(model.to_string())))
                .collect();
            tiles.push(tile(
                OTHER_UNKNOWN,
                "If your model isn't listed".to_string(),
                Choice::Model(OTHER_UNKNOWN.to_string()),
            ));
            tiles
        }
        Step::Category => Category::ALL
            .into_iter()
            .filter(|category| label_matches(category.label()))
            .map(|category| {
                tile(
                    category.label(),
                    category.meta().to_string(),
                    Choice::Category(category),
                )
            })
            .collect(),
        Step::Results => vec![],
    }
}
