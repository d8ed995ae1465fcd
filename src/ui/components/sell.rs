//! Sell form renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SellView;

fn field(out: &mut String, theme: &Theme, name: &str, value: &str) {
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(" {name:<12}"));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(value);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders the form fields, the offered makes and models, and the post state.
pub fn render_sell(out: &mut String, view: &SellView, theme: &Theme) {
    field(out, theme, "era", view.era);
    field(out, theme, "make", &view.make);
    field(out, theme, "model", &view.model);
    field(out, theme, "category", view.category);
    field(out, theme, "title", &view.title);
    field(out, theme, "description", &view.description);
    field(out, theme, "condition", view.condition);
    field(out, theme, "price", &view.price);
    field(out, theme, "location", &view.location);
    field(out, theme, "postage", if view.postage { "yes" } else { "no" });
    field(
        out,
        theme,
        "photos",
        &format!("{} of {}", view.photo_count, view.max_photos),
    );

    out.push('\n');
    field(out, theme, "makes", &view.makes.join(", "));
    field(out, theme, "models", &view.models.join(", "));
    out.push('\n');

    if view.can_post {
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(" Ready to post.\n");
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(" Posting needs a title of 4+ characters, a price and a location.\n");
    }
    out.push_str(Theme::reset());
}
