//! Search bar component renderer.
//!
//! Draws a bordered box holding the query, or the step's placeholder in dim
//! text while the query is empty.

use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the three-line search box.
///
/// ```text
///   ┌──────────────────────────┐
///   │ Search: speedo           │
///   └──────────────────────────┘
/// ```
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');

    let (text, color) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), Theme::fg(&theme.colors.text_dim))
    } else {
        (format!(" Search: {}", search.query), Theme::fg(&theme.colors.text_normal))
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(display_width(&text));

    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&color);
    out.push_str(&text);
    out.push_str(&" ".repeat(padding));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');
}
