//! Listing detail page renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListingView;

/// Renders the detail page.
///
/// ```text
///  Smiths speedo head (mph), tested                          £495
///  1950–1970 • Jaguar • XK140
///  Electrical & Ignition • Used • Postage available
///  West Sussex • posted 28 May 2024 • 0 photos
/// ```
pub fn render_listing(out: &mut String, view: &ListingView, theme: &Theme) {
    out.push_str(Theme::bold());
    out.push(' ');
    out.push_str(&view.title);
    out.push_str("   ");
    out.push_str(&Theme::fg(&theme.colors.price_fg));
    out.push_str(&view.price);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.accent_alt));
    out.push(' ');
    out.push_str(&view.vehicle);
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!(" {} • {} • {}\n", view.category, view.condition, view.postage));

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let photos = match view.photo_count {
        1 => "1 photo".to_string(),
        n => format!("{n} photos"),
    };
    out.push_str(&format!(" {} • posted {} • {photos}\n", view.location, view.posted_on));
    out.push_str(Theme::reset());

    if let Some(description) = &view.description {
        out.push('\n');
        for line in description.lines() {
            out.push(' ');
            out.push_str(line);
            out.push('\n');
        }
    }
}
