//! Listing table component renderer.
//!
//! Renders listing cards as numbered rows with TITLE, VEHICLE and PRICE
//! columns. The number is what the `open <n>` command refers to. Title text
//! matching the query is highlighted.

use crate::ui::helpers::{self, display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListingCard;

const INDEX_WIDTH: usize = 5;
const VEHICLE_WIDTH: usize = 28;
const PRICE_WIDTH: usize = 10;
const MIN_TITLE_WIDTH: usize = 12;

fn title_width(cols: usize) -> usize {
    cols.saturating_sub(INDEX_WIDTH + VEHICLE_WIDTH + PRICE_WIDTH + 2)
        .max(MIN_TITLE_WIDTH)
}

/// Renders the column headers.
pub fn render_table_headers(out: &mut String, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!(
        "{:index$}{:<title$} {:<vehicle$} {:>price$}",
        "",
        "TITLE",
        "VEHICLE",
        "PRICE",
        index = INDEX_WIDTH,
        title = title_width(cols),
        vehicle = VEHICLE_WIDTH,
        price = PRICE_WIDTH,
    ));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders one row per card, numbered from 1.
pub fn render_table_rows(out: &mut String, cards: &[ListingCard], theme: &Theme, cols: usize) {
    for (index, card) in cards.iter().enumerate() {
        render_table_row(out, index + 1, card, theme, cols);
    }
}

/// Renders a single row.
///
/// ```text
///   1  Smiths speedo head (mph)…   Jaguar • XK140                 £495
///      Electrical & Ignition • Used • West Sussex
/// ```
fn render_table_row(out: &mut String, number: usize, card: &ListingCard, theme: &Theme, cols: usize) {
    let title_width = title_width(cols);
    let title = truncate(&card.title, title_width);
    let vehicle = truncate(&card.vehicle, VEHICLE_WIDTH);

    out.push_str(&Theme::fg(&theme.colors.accent_alt));
    out.push_str(&format!("{number:>3}  "));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    helpers::push_highlighted(out, &title, &card.highlight_ranges, theme);
    out.push_str(&" ".repeat(title_width.saturating_sub(display_width(&title)) + 1));

    out.push_str(&vehicle);
    out.push_str(&" ".repeat(VEHICLE_WIDTH.saturating_sub(display_width(&vehicle)) + 1));

    out.push_str(&Theme::fg(&theme.colors.price_fg));
    out.push_str(&" ".repeat(PRICE_WIDTH.saturating_sub(display_width(&card.price))));
    out.push_str(&card.price);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(INDEX_WIDTH));
    out.push_str(&format!("{} • {} • {}", card.category, card.condition, card.location));
    out.push_str(Theme::reset());
    out.push('\n');
}
