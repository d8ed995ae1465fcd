//! Composable UI component renderers.
//!
//! Each component appends one part of the screen to a `String` frame.
//!
//! # Components
//!
//! - `header`: Title bar and page subtitle
//! - `footer`: Command hints
//! - `search`: Search input box
//! - `tiles`: Numbered funnel tiles
//! - `table`: Numbered listing rows
//! - `browse`: Breadcrumbs, tiles, instant matches and results
//! - `listing`: Listing detail page
//! - `sell`: Sell form
//! - `empty`: Centered message for missing content

mod browse;
mod empty;
mod footer;
mod header;
mod listing;
mod search;
mod sell;
mod table;
mod tiles;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageView, UIViewModel};

use browse::render_browse;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use listing::render_listing;
use sell::render_sell;

/// Appends a horizontal border line.
fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders a full frame.
///
/// ```text
/// [Header]
/// [Border]
/// [Notice, if any]
/// [Page body]
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if let Some(notice) = &vm.notice {
        out.push_str(&Theme::fg(&theme.colors.notice_fg));
        out.push_str(" ! ");
        out.push_str(notice);
        out.push_str(Theme::reset());
        out.push('\n');
    }

    match &vm.page {
        PageView::Browse(view) => render_browse(out, view, theme, cols),
        PageView::Sell(view) => render_sell(out, view, theme),
        PageView::Listing(view) => render_listing(out, view, theme),
        PageView::NotFound(empty) => render_empty_state(out, empty, theme, cols),
    }

    render_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
