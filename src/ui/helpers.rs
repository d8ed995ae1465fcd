//! Shared rendering utilities.
//!
//! Components render into a `String` buffer rather than straight to stdout, so
//! a frame can be inspected in tests and written in one go by the front end.
//! Widths are counted in characters, since labels contain `£`, `•` and `–`.

use crate::ui::theme::Theme;

/// Visible width of `text` in characters.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Appends `text` centered within `cols` columns, padded on both sides.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let width = display_width(text).min(cols);
    let padding = cols.saturating_sub(width) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + width)));
}

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. After each highlight the normal text color is restored.
///
/// # Example
///
/// ```
/// use spareshub::ui::helpers::push_highlighted;
/// use spareshub::ui::Theme;
///
/// let theme = Theme::default();
/// let mut out = String::new();
/// push_highlighted(&mut out, "speedo head", &[(0, 6)], &theme);
/// assert!(out.contains("speedo"));
/// assert!(out.ends_with(" head"));
/// ```
pub fn push_highlighted(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("£1,234", 10), "£1,234");
        assert_eq!(truncate("Smiths speedometer", 8), "Smiths …");
    }

    #[test]
    fn centering_fills_the_line() {
        let mut out = String::new();
        push_centered(&mut out, "ab", 6);
        assert_eq!(out, "  ab  ");
    }

    #[test]
    fn highlight_keeps_all_text() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "a•bc", &[(1, 3), (2, 9)], &theme);

        let plain: String = out
            .split('\u{1b}')
            .enumerate()
            .map(|(i, part)| if i == 0 { part } else { part.split_once('m').map_or("", |(_, rest)| rest) })
            .collect();
        assert_eq!(plain, "a•bc");
    }
}
