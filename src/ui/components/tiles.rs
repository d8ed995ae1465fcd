//! Funnel tile renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::TileView;

/// Renders tiles as a numbered list, with the reachable listing count.
///
/// ```text
///   1  Jaguar                 2 listed
///      Tap to choose
/// ```
pub fn render_tiles(out: &mut String, tiles: &[TileView], theme: &Theme) {
    let label_width = tiles
        .iter()
        .map(|tile| tile.label.chars().count())
        .max()
        .unwrap_or(0);

    for (index, tile) in tiles.iter().enumerate() {
        out.push_str(&Theme::fg(&theme.colors.accent_alt));
        out.push_str(&format!("{:>3}  ", index + 1));
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(&tile.label);
        out.push_str(Theme::reset());

        if tile.listing_count > 0 {
            let gap = label_width.saturating_sub(tile.label.chars().count()) + 2;
            out.push_str(&" ".repeat(gap));
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&format!("{} listed", tile.listing_count));
            out.push_str(Theme::reset());
        }
        out.push('\n');

        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("     ");
        out.push_str(&tile.meta);
        out.push_str(Theme::reset());
        out.push('\n');
    }
}
