//! Footer component renderer.
//!
//! Shows the commands available on the current page, dimmed and centered.

use crate::ui::helpers::{push_centered, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &truncate(&footer.keybindings, cols), cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
