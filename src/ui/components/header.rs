//! Header component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered over `cols`, then the page subtitle.
///
/// ```text
/// [left padding] TITLE [right padding]
///  subtitle
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    push_centered(out, &header.title, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push(' ');
    out.push_str(&header.subtitle);
    out.push_str(Theme::reset());
    out.push('\n');
}
