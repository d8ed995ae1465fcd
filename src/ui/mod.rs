//! User interface layer.
//!
//! Turns application state into view models and view models into ANSI-styled
//! text frames.
//!
//! # Modules
//!
//! - [`viewmodel`]: Presentation types handed to any renderer
//! - [`presenter`]: Pure functions building view models, including instant matches
//! - [`renderer`]: Top-level rendering coordinator
//! - `components`: Composable component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod presenter;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use presenter::{format_price, format_price_range, PREVIEW_LIMIT};
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    Breadcrumb, BrowseView, EmptyState, FooterInfo, HeaderInfo, InstantMatches, ListingCard,
    ListingView, PageView, ResultsView, SearchBarInfo, SellView, TileView, UIViewModel,
};
