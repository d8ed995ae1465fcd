//! Query layer: filtering, searching and sorting listings for the funnel.
//!
//! # Modules
//!
//! - [`engine`]: Ordered result set and price bounds for a selection
//! - [`tiles`]: Reachable era/make/model/category choices for the current step

pub mod engine;
pub mod tiles;

pub use engine::{matches_selection, run_query, QueryResult};
pub use tiles::{tiles_for, Tile};
