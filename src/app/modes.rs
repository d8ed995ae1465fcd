//! Step, field, sort and route types for the browsing session.
//!
//! These enums describe where the user is in the drill-down funnel, which
//! selection field an operation targets, how results are ordered and which page
//! is active.
//!
//! # Funnel Order
//!
//! ```text
//! Era → Make → Model → Category → Results
//! ```

use std::fmt;
use std::str::FromStr;

/// Position within the drill-down funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Era,
    Make,
    Model,
    Category,
    Results,
}

impl Step {
    /// Heading shown above the tiles for this step.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Era => "Choose an era",
            Self::Make => "Choose a make",
            Self::Model => "Choose a model",
            Self::Category => "Choose a category",
            Self::Results => "Parts for sale",
        }
    }

    /// Placeholder text for the search bar on this step.
    #[must_use]
    pub const fn search_placeholder(self) -> &'static str {
        match self {
            Self::Era => "",
            Self::Make => "Search makes OR type a part (e.g. speedo)…",
            Self::Model => "Search models OR type a part (e.g. speedo)…",
            Self::Category => "Search categories OR type a part (e.g. steering)…",
            Self::Results => "Search results (e.g. speedo, steering, Weber)…",
        }
    }
}

/// A selection field of the funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunnelField {
    Era,
    Make,
    Model,
    Category,
}

impl FunnelField {
    /// The step at which this field is chosen.
    #[must_use]
    pub const fn step(self) -> Step {
        match self {
            Self::Era => Step::Era,
            Self::Make => Step::Make,
            Self::Model => Step::Model,
            Self::Category => Step::Category,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Era => "Era",
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Category => "Category",
        }
    }
}

impl FromStr for FunnelField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "era" => Ok(Self::Era),
            "make" => Ok(Self::Make),
            "model" => Ok(Self::Model),
            "category" | "cat" => Ok(Self::Category),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Descending by creation timestamp.
    #[default]
    Newest,
    /// Ascending by price, stable for equal prices.
    PriceAscending,
    /// Descending by price, stable for equal prices.
    PriceDescending,
}

impl SortMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAscending => "Price: low → high",
            Self::PriceDescending => "Price: high → low",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "new" => Ok(Self::Newest),
            "price-asc" | "price_asc" | "low" => Ok(Self::PriceAscending),
            "price-desc" | "price_desc" | "high" => Ok(Self::PriceDescending),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The drill-down funnel and results.
    #[default]
    Browse,
    /// The sell form.
    Sell,
    /// Detail page of a single listing, by id.
    Listing(String),
}
