//! Listing domain model.
//!
//! A [`Listing`] is an immutable record of a part offered for sale. Listings are
//! created by the sell flow, prepended to the store (so the stored order is
//! newest-first) and only ever removed by a full reset of the demo data.

use super::catalog::{Category, Era};
use serde::{Deserialize, Serialize};

/// Maximum number of photos attached to a single listing.
pub const MAX_PHOTOS: usize = 6;

/// Physical condition of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Original,
    Used,
    Overhauled,
    #[serde(rename = "NOS")]
    Nos,
    Reproduction,
    Unknown,
}

impl Condition {
    pub const ALL: [Self; 6] = [
        Self::Original,
        Self::Used,
        Self::Overhauled,
        Self::Nos,
        Self::Reproduction,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Used => "Used",
            Self::Overhauled => "Overhauled",
            Self::Nos => "NOS",
            Self::Reproduction => "Reproduction",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a condition from its label, ignoring case.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.label().eq_ignore_ascii_case(text.trim()))
    }
}

/// A part offered for sale.
///
/// # Fields
///
/// - `id`: Opaque identifier, stable for the record's lifetime
/// - `created_at`: Unix timestamp in milliseconds; strictly increases with insertion order
/// - `era`, `make`, `model`, `category`: Classification used by the funnel
/// - `price`: Asking price in whole pounds, always positive
/// - `photos`: Embeddable photo references (data URLs), at most [`MAX_PHOTOS`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub created_at: i64,

    pub era: Era,
    pub make: String,
    pub model: String,
    pub category: Category,

    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub condition: Condition,

    pub price: u32,
    pub location: String,
    pub postage_available: bool,

    #[serde(default)]
    pub photos: Vec<String>,
}

/// Lowercases `text` one character at a time.
///
/// Each character maps to exactly one character, so positions in the folded
/// text line up with positions in the original. Search and match highlighting
/// both fold with this.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// First character of the lowercase form of `c`.
#[must_use]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl Listing {
    /// Returns `true` if the case-folded query occurs in any searchable field.
    ///
    /// Searchable fields are title, description, make, model and the category's
    /// display label. `folded_query` must already be folded with [`fold_case`].
    #[must_use]
    pub fn matches_text(&self, folded_query: &str) -> bool {
        let contains = |field: &str| fold_case(field).contains(folded_query);

        contains(&self.title)
            || contains(self.description.as_deref().unwrap_or_default())
            || contains(&self.make)
            || contains(&self.model)
            || contains(self.category.label())
    }

    /// Human-readable postage line.
    #[must_use]
    pub const fn postage_label(&self) -> &'static str {
        if self.postage_available {
            "Postage available"
        } else {
            "Collection only"
        }
    }

    /// Formats the creation date, e.g. `"14 Mar 2024"`.
    ///
    /// Falls back to an empty string for timestamps chrono cannot represent.
    #[must_use]
    pub fn posted_on(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.created_at)
            .map(|date| date.format("%-d %b %Y").to_string())
            .unwrap_or_default()
    }
}
