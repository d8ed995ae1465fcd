//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → String
//! ```
//!
//! The frame is returned rather than printed, so the front end decides when and
//! where it is written.
//!
//! # Example
//!
//! ```
//! use spareshub::app::AppState;
//! use spareshub::storage::seed_listings;
//! use spareshub::ui::{render, Theme};
//!
//! let state = AppState::new(seed_listings(), Theme::default());
//! let frame = render(&state, 80);
//! assert!(frame.contains("Choose an era"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the current state as an ANSI-styled frame `cols` wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_frame(&mut out, vm, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::funnel::{reduce, Choice, FunnelAction};
    use crate::app::modes::Route;
    use crate::domain::Era;
    use crate::storage::seed_listings;

    fn state() -> AppState {
        AppState::new(seed_listings(), Theme::default())
    }

    #[test]
    fn era_step_lists_every_era() {
        let frame = render(&state(), 80);
        for label in ["Pre-1950", "1950–1970", "1970–1980", "1980–2000"] {
            assert!(frame.contains(label), "missing {label}");
        }
        assert!(!frame.contains("Instant matches"));
    }

    #[test]
    fn query_shows_instant_matches() {
        let mut state = state();
        for action in [
            FunnelAction::Advance(Choice::Era(Era::Postwar)),
            FunnelAction::SetQuery("speedo".to_string()),
        ] {
            state.selection = reduce(state.selection, &action);
        }

        let frame = render(&state, 100);
        assert!(frame.contains("Instant matches"));
        assert!(frame.contains("2 results"));
        assert!(frame.contains("£495–£640"));
    }

    #[test]
    fn not_found_and_notice_render() {
        let mut state = state();
        state.route = Route::Listing("gone".to_string());
        state.notice = Some("heads up".to_string());

        let frame = render(&state, 60);
        assert!(frame.contains("Listing not found"));
        assert!(frame.contains("heads up"));
    }

    #[test]
    fn sell_form_renders_draft() {
        let mut state = state();
        state.route = Route::Sell;
        let frame = render(&state, 80);
        assert!(frame.contains("E-Type Series 1"));
        assert!(frame.contains("£250"));
    }
}
