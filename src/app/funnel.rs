//! Funnel state machine.
//!
//! The funnel narrows the listing collection step by step: era, make, model,
//! category, then results. [`Selection`] holds the current position and choices;
//! [`reduce`] is the only way to move between states. The reducer is a pure,
//! total function: every `(selection, action)` pair yields a selection that
//! satisfies [`Selection::is_consistent`].
//!
//! # Query Persistence
//!
//! The free-text query survives make, model and category transitions so a term
//! typed before picking a make keeps applying inside that make. Only picking an
//! era, a full reset, or clearing the era breadcrumb empties it.

use super::modes::{FunnelField, SortMode, Step};
use crate::domain::catalog::{self, Category, Era};

/// Transient drill-down state for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub era: Option<Era>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub category: Option<Category>,
    pub step: Step,
    pub query: String,
    pub sort: SortMode,
}

/// A value picked at one of the funnel steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice {
    Era(Era),
    Make(String),
    Model(String),
    Category(Category),
}

impl Choice {
    /// The field this choice sets.
    #[must_use]
    pub const fn field(&self) -> FunnelField {
        match self {
            Self::Era(_) => FunnelField::Era,
            Self::Make(_) => FunnelField::Make,
            Self::Model(_) => FunnelField::Model,
            Self::Category(_) => FunnelField::Category,
        }
    }
}

/// Transitions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunnelAction {
    /// Sets a field and moves to the next step. Ignored unless the current step
    /// is the step that chooses this field.
    Advance(Choice),
    /// Leaves a field unset and moves on. Only the model may be skipped.
    Skip(FunnelField),
    /// Returns to the previous step, clearing the field chosen there.
    Back,
    /// Clears a breadcrumb and everything that depends on it.
    ClearField(FunnelField),
    /// Returns to the era step with nothing selected.
    Reset,
    /// Jumps straight to results with the current selection.
    OpenResults,
    /// Applies the make whose name equals the typed query, if any.
    ContinueWithQuery,
    SetQuery(String),
    ClearQuery,
    SetSort(SortMode),
}

impl Selection {
    /// Trimmed free-text query.
    #[must_use]
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// Returns `true` if `step` agrees with the set of chosen fields.
    ///
    /// Model may be unset once past the model step (skipped), and results may be
    /// opened early from any step after era, leaving later fields unset. Going
    /// back from such early results lands on the category step with no make.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        let era = self.era.is_some();
        let make = self.make.is_some();
        let model = self.model.is_some();
        let category = self.category.is_some();

        match self.step {
            Step::Era => !era && !make && !model && !category,
            Step::Make => era && !make && !model && !category,
            Step::Model => era && make && !model && !category,
            Step::Category => era && !category && (make || !model),
            Step::Results => era && (make || !model),
        }
    }

    fn clear_from(&mut self, field: FunnelField) {
        match field {
            FunnelField::Era => *self = Self::default(),
            FunnelField::Make => {
                self.make = None;
                self.model = None;
                self.category = None;
            }
            FunnelField::Model => {
                self.model = None;
                self.category = None;
            }
            FunnelField::Category => self.category = None,
        }
    }

    /// Moves back to `target`, or further if a prerequisite field is unset.
    /// Never moves forward. The category step does not need a make.
    fn settle_at(&mut self, target: Step) {
        let target = target.min(self.step);
        self.step = if self.era.is_none() {
            Step::Era
        } else if self.make.is_none() && target == Step::Model {
            Step::Make
        } else {
            target
        };
    }
}

/// Applies a funnel action, returning the next selection.
///
/// # Examples
///
/// ```
/// use spareshub::app::funnel::{reduce, Choice, FunnelAction, Selection};
/// use spareshub::app::Step;
/// use spareshub::domain::Era;
///
/// let s = reduce(Selection::default(), &FunnelAction::Advance(Choice::Era(Era::Postwar)));
/// let s = reduce(s, &FunnelAction::SetQuery("speedo".into()));
/// let s = reduce(s, &FunnelAction::Advance(Choice::Make("Jaguar".into())));
///
/// assert_eq!(s.step, Step::Model);
/// assert_eq!(s.query, "speedo");
/// ```
#[must_use]
pub fn reduce(mut selection: Selection, action: &FunnelAction) -> Selection {
    match action {
        FunnelAction::Advance(choice) => {
            if selection.step != choice.field().step() {
                return selection;
            }
            match choice {
                Choice::Era(era) => {
                    selection.era = Some(*era);
                    selection.make = None;
                    selection.model = None;
                    selection.category = None;
                    selection.query.clear();
                    selection.step = Step::Make;
                }
                Choice::Make(make) => {
                    selection.make = Some(make.clone());
                    selection.step = Step::Model;
                }
                Choice::Model(model) => {
                    selection.model = Some(model.clone());
                    selection.step = Step::Category;
                }
                Choice::Category(category) => {
                    selection.category = Some(*category);
                    selection.step = Step::Results;
                }
            }
        }
        FunnelAction::Skip(FunnelField::Model) => {
            if selection.step == Step::Model {
                selection.model = None;
                selection.step = Step::Category;
            }
        }
        FunnelAction::Skip(_) => {}
        FunnelAction::Back => {
            let departed = match selection.step {
                Step::Era => return selection,
                Step::Make => FunnelField::Era,
                Step::Model => FunnelField::Make,
                Step::Category => FunnelField::Model,
                Step::Results => FunnelField::Category,
            };
            return reduce(selection, &FunnelAction::ClearField(departed));
        }
        FunnelAction::ClearField(field) => {
            selection.clear_from(*field);
            selection.settle_at(field.step());
        }
        FunnelAction::Reset => selection = Selection::default(),
        FunnelAction::OpenResults => {
            if selection.step != Step::Era {
                selection.step = Step::Results;
            }
        }
        FunnelAction::ContinueWithQuery => {
            if selection.step != Step::Make {
                return selection;
            }
            let Some(era) = selection.era else {
                return selection;
            };
            let typed = selection.trimmed_query().to_lowercase();
            let exact = catalog::makes_for(era)
                .into_iter()
                .find(|make| make.to_lowercase() == typed);

            if let Some(make) = exact {
                tracing::debug!(make, "typed make applied");
                selection.make = Some(make.to_string());
                selection.query.clear();
                selection.step = Step::Model;
            }
        }
        FunnelAction::SetQuery(text) => selection.query.clone_from(text),
        FunnelAction::ClearQuery => selection.query.clear(),
        FunnelAction::SetSort(sort) => selection.sort = *sort,
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_category() -> Selection {
        [
            FunnelAction::Advance(Choice::Era(Era::Postwar)),
            FunnelAction::Advance(Choice::Make("Jaguar".to_string())),
            FunnelAction::Advance(Choice::Model("XK140".to_string())),
        ]
        .iter()
        .fold(Selection::default(), reduce)
    }

    fn all_actions() -> Vec<FunnelAction> {
        vec![
            FunnelAction::Advance(Choice::Era(Era::Modern)),
            FunnelAction::Advance(Choice::Make("Ford".to_string())),
            FunnelAction::Advance(Choice::Model("Capri".to_string())),
            FunnelAction::Advance(Choice::Category(Category::Brakes)),
            FunnelAction::Skip(FunnelField::Model),
            FunnelAction::Skip(FunnelField::Category),
            FunnelAction::Back,
            FunnelAction::ClearField(FunnelField::Era),
            FunnelAction::ClearField(FunnelField::Make),
            FunnelAction::ClearField(FunnelField::Model),
            FunnelAction::ClearField(FunnelField::Category),
            FunnelAction::Reset,
            FunnelAction::OpenResults,
            FunnelAction::ContinueWithQuery,
            FunnelAction::SetQuery("ford".to_string()),
            FunnelAction::ClearQuery,
            FunnelAction::SetSort(SortMode::PriceDescending),
        ]
    }

    #[test]
    fn every_reachable_state_stays_consistent() {
        let actions = all_actions();
        let mut frontier = vec![Selection::default()];
        let mut seen = vec![];

        while let Some(state) = frontier.pop() {
            assert!(state.is_consistent(), "inconsistent: {state:?}");
            if seen.contains(&state) {
                continue;
            }
            seen.push(state.clone());
            for action in &actions {
                let next = reduce(state.clone(), action);
                assert!(next.is_consistent(), "{action:?} from {state:?} gave {next:?}");
                if !seen.contains(&next) {
                    frontier.push(next);
                }
            }
        }

        assert!(seen.len() > 10);
    }

    #[test]
    fn advance_then_back_restores_step() {
        let steps = [
            Choice::Era(Era::Postwar),
            Choice::Make("Jaguar".to_string()),
            Choice::Model("XK140".to_string()),
            Choice::Category(Category::Electrical),
        ];

        let mut state = Selection::default();
        for choice in steps {
            let before = state.step;
            let advanced = reduce(state.clone(), &FunnelAction::Advance(choice.clone()));
            assert_ne!(advanced.step, before);

            let back = reduce(advanced.clone(), &FunnelAction::Back);
            assert_eq!(back.step, before);
            let cleared = match choice.field() {
                FunnelField::Era => back.era.is_none(),
                FunnelField::Make => back.make.is_none(),
                FunnelField::Model => back.model.is_none(),
                FunnelField::Category => back.category.is_none(),
            };
            assert!(cleared);

            state = advanced;
        }
    }

    #[test]
    fn query_survives_make_model_category_and_skip() {
        let mut state = reduce(
            Selection::default(),
            &FunnelAction::Advance(Choice::Era(Era::Postwar)),
        );
        state = reduce(state, &FunnelAction::SetQuery("speedo".to_string()));

        for action in [
            FunnelAction::Advance(Choice::Make("Jaguar".to_string())),
            FunnelAction::Skip(FunnelField::Model),
            FunnelAction::Advance(Choice::Category(Category::Electrical)),
        ] {
            state = reduce(state, &action);
            assert_eq!(state.query, "speedo");
        }
        assert_eq!(state.step, Step::Results);
        assert!(state.model.is_none());
    }

    #[test]
    fn picking_era_clears_query() {
        let state = Selection {
            query: "rack".to_string(),
            ..Selection::default()
        };
        let state = reduce(state, &FunnelAction::Advance(Choice::Era(Era::Modern)));
        assert!(state.query.is_empty());
        assert_eq!(state.step, Step::Make);
    }

    #[test]
    fn clearing_make_drops_dependents() {
        let state = reduce(at_category(), &FunnelAction::SetQuery("smiths".to_string()));
        let state = reduce(state, &FunnelAction::ClearField(FunnelField::Make));

        assert_eq!(state.step, Step::Make);
        assert_eq!(state.era, Some(Era::Postwar));
        assert!(state.make.is_none() && state.model.is_none());
        assert_eq!(state.query, "smiths");
    }

    #[test]
    fn clearing_era_is_full_reset() {
        let state = reduce(at_category(), &FunnelAction::SetSort(SortMode::PriceAscending));
        let state = reduce(state, &FunnelAction::SetQuery("x".to_string()));
        let state = reduce(state, &FunnelAction::ClearField(FunnelField::Era));
        assert_eq!(state, Selection::default());
    }

    #[test]
    fn clearing_model_keeps_make_and_query() {
        let state = reduce(at_category(), &FunnelAction::Advance(Choice::Category(Category::Electrical)));
        let state = reduce(state, &FunnelAction::SetQuery("smiths".to_string()));
        let state = reduce(state, &FunnelAction::ClearField(FunnelField::Model));

        assert_eq!(state.step, Step::Model);
        assert_eq!(state.make.as_deref(), Some("Jaguar"));
        assert!(state.model.is_none() && state.category.is_none());
        assert_eq!(state.query, "smiths");
    }

    #[test]
    fn clearing_category_returns_to_category_step() {
        let state = reduce(at_category(), &FunnelAction::Advance(Choice::Category(Category::Electrical)));
        let state = reduce(state, &FunnelAction::SetQuery("smiths".to_string()));
        let state = reduce(state, &FunnelAction::ClearField(FunnelField::Category));

        assert_eq!(state.step, Step::Category);
        assert_eq!(state.model.as_deref(), Some("XK140"));
        assert!(state.category.is_none());
        assert_eq!(state.query, "smiths");
    }

    #[test]
    fn back_from_early_results_goes_to_category() {
        let state = reduce(
            Selection::default(),
            &FunnelAction::Advance(Choice::Era(Era::Postwar)),
        );
        let state = reduce(state, &FunnelAction::OpenResults);
        assert_eq!(state.step, Step::Results);

        let state = reduce(state, &FunnelAction::Back);
        assert_eq!(state.step, Step::Category);
        assert!(state.make.is_none());
        assert!(state.is_consistent());

        let state = reduce(state, &FunnelAction::Advance(Choice::Category(Category::Engine)));
        assert_eq!(state.step, Step::Results);
        assert!(state.is_consistent());

        let state = reduce(state, &FunnelAction::Back);
        let state = reduce(state, &FunnelAction::Back);
        assert_eq!(state.step, Step::Make);
    }

    #[test]
    fn advance_out_of_step_is_ignored() {
        let state = reduce(
            Selection::default(),
            &FunnelAction::Advance(Choice::Make("Jaguar".to_string())),
        );
        assert_eq!(state, Selection::default());
    }

    #[test]
    fn open_results_is_ignored_on_era_step() {
        let state = reduce(Selection::default(), &FunnelAction::OpenResults);
        assert_eq!(state.step, Step::Era);
    }

    #[test]
    fn continue_applies_exact_make_case_insensitively() {
        let state = reduce(
            Selection::default(),
            &FunnelAction::Advance(Choice::Era(Era::Postwar)),
        );
        let state = reduce(state, &FunnelAction::SetQuery("  jaguar ".to_string()));
        let state = reduce(state, &FunnelAction::ContinueWithQuery);

        assert_eq!(state.make.as_deref(), Some("Jaguar"));
        assert_eq!(state.step, Step::Model);
        assert!(state.query.is_empty());
    }

    #[test]
    fn continue_without_exact_match_is_a_no_op() {
        let state = reduce(
            Selection::default(),
            &FunnelAction::Advance(Choice::Era(Era::Postwar)),
        );
        let state = reduce(state, &FunnelAction::SetQuery("jag".to_string()));
        let after = reduce(state.clone(), &FunnelAction::ContinueWithQuery);
        assert_eq!(after, state);
    }

    #[test]
    fn sort_and_query_never_move_the_step() {
        let state = at_category();
        let sorted = reduce(state.clone(), &FunnelAction::SetSort(SortMode::PriceDescending));
        let queried = reduce(sorted.clone(), &FunnelAction::SetQuery("loom".to_string()));
        let cleared = reduce(queried.clone(), &FunnelAction::ClearQuery);

        assert_eq!(sorted.step, state.step);
        assert_eq!(queried.step, state.step);
        assert_eq!(cleared.step, state.step);
        assert_eq!(cleared.sort, SortMode::PriceDescending);
    }
}
