//! Browse page renderer: breadcrumbs, search, tiles, instant matches, results.

use super::empty::render_empty_state;
use super::search::render_search_bar;
use super::table::{render_table_headers, render_table_rows};
use super::tiles::render_tiles;
use crate::app::modes::Step;
use crate::ui::presenter::format_price_range;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BrowseView, Breadcrumb, InstantMatches, ResultsView};

pub fn render_browse(out: &mut String, view: &BrowseView, theme: &Theme, cols: usize) {
    if !view.breadcrumbs.is_empty() {
        render_breadcrumbs(out, &view.breadcrumbs, theme);
    }
    if let Some(search) = &view.search_bar {
        render_search_bar(out, search, theme, cols);
    }

    out.push_str(Theme::bold());
    out.push(' ');
    out.push_str(view.heading);
    out.push_str(Theme::reset());
    out.push('\n');

    if !view.tiles.is_empty() {
        render_tiles(out, &view.tiles, theme);
    }

    match (&view.results, &view.instant_matches) {
        (Some(results), instant) => render_results(out, results, instant.as_ref(), theme, cols),
        (None, Some(instant)) => render_instant_matches(out, instant, theme, cols),
        (None, None) if view.step == Step::Era => {}
        (None, None) => {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(" Type a part name to see instant matches.\n");
            out.push_str(Theme::reset());
        }
    }
}

fn render_breadcrumbs(out: &mut String, crumbs: &[Breadcrumb], theme: &Theme) {
    out.push(' ');
    for crumb in crumbs {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(crumb.field.label());
        out.push_str(": ");
        out.push_str(&Theme::fg(&theme.colors.accent_alt));
        out.push_str(&crumb.value);
        out.push_str(" ✕  ");
    }
    out.push_str(Theme::reset());
    out.push('\n');
}

fn summary_line(title: &str, total: usize, min: u32, max: u32) -> String {
    if total == 0 {
        format!(" {title} • 0 results")
    } else {
        format!(" {title} • {total} results • {}", format_price_range(min, max))
    }
}

fn render_instant_matches(out: &mut String, instant: &InstantMatches, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(" Instant matches");
    out.push_str(Theme::reset());
    if instant.show_view_all {
        out.push_str(&Theme::fg(&theme.colors.accent_alt));
        out.push_str("   [results: open all]");
        out.push_str(Theme::reset());
    }
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&summary_line(&instant.title, instant.total, instant.min_price, instant.max_price));
    out.push_str(Theme::reset());
    out.push('\n');

    if instant.items.is_empty() {
        out.push_str(" No matches yet for that keyword here. Try a broader term.\n");
        return;
    }

    render_table_headers(out, theme, cols);
    render_table_rows(out, &instant.items, theme, cols);

    if let Some(note) = instant.showing_note() {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push(' ');
        out.push_str(&note);
        out.push_str(". Open results to see all.");
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

fn render_results(
    out: &mut String,
    results: &ResultsView,
    instant: Option<&InstantMatches>,
    theme: &Theme,
    cols: usize,
) {
    let title = instant.map_or("Results", |instant| instant.title.as_str());

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&summary_line(title, results.count, results.min_price, results.max_price));
    out.push_str(&format!(" • sorted by {}", results.sort));
    out.push_str(Theme::reset());
    out.push('\n');

    if let Some(empty) = &results.empty_state {
        render_empty_state(out, empty, theme, cols);
        return;
    }

    render_table_headers(out, theme, cols);
    render_table_rows(out, &results.items, theme, cols);
}
