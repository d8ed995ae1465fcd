//! Sell-flow draft and its posting gate.
//!
//! A [`SellDraft`] holds the form values of a listing being written. It always
//! has an era, category and condition, so the gate only checks the free-text
//! fields, the price and the make/model pair. A draft that fails the gate never
//! produces a [`Listing`].

use crate::domain::catalog::{self, Category, Era, OTHER_UNKNOWN};
use crate::domain::{Condition, Listing, MAX_PHOTOS};

const DEFAULT_PRICE: u32 = 250;
const DEFAULT_LOCATION: &str = "UK";
const MIN_TITLE_CHARS: usize = 4;
const MIN_LOCATION_CHARS: usize = 2;

/// Form values for a listing that has not been posted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellDraft {
    pub era: Era,
    pub make: String,
    pub model: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub condition: Condition,
    pub price: u32,
    pub location: String,
    pub postage_available: bool,
    pub photos: Vec<String>,
}

impl Default for SellDraft {
    fn default() -> Self {
        Self {
            era: Era::Postwar,
            make: "Jaguar".to_string(),
            model: "E-Type Series 1".to_string(),
            category: Category::Electrical,
            title: String::new(),
            description: String::new(),
            condition: Condition::Used,
            price: DEFAULT_PRICE,
            location: DEFAULT_LOCATION.to_string(),
            postage_available: true,
            photos: Vec::new(),
        }
    }
}

/// A single change to a draft, as produced by the sell form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Era(Era),
    Make(String),
    Model(String),
    Category(Category),
    Title(String),
    Description(String),
    Condition(Condition),
    Price(u32),
    Location(String),
    Postage(bool),
    RemovePhoto(usize),
    /// Empties title and description.
    ClearText,
}

impl SellDraft {
    /// Applies one form edit.
    pub fn apply(&mut self, edit: &DraftEdit) {
        match edit {
            DraftEdit::Era(era) => self.set_era(*era),
            DraftEdit::Make(make) => self.set_make(make),
            DraftEdit::Model(model) => self.model.clone_from(model),
            DraftEdit::Category(category) => self.category = *category,
            DraftEdit::Title(title) => self.title.clone_from(title),
            DraftEdit::Description(description) => self.description.clone_from(description),
            DraftEdit::Condition(condition) => self.condition = *condition,
            DraftEdit::Price(price) => self.price = *price,
            DraftEdit::Location(location) => self.location.clone_from(location),
            DraftEdit::Postage(postage) => self.postage_available = *postage,
            DraftEdit::RemovePhoto(index) => self.remove_photo(*index),
            DraftEdit::ClearText => self.clear_text(),
        }
    }

    /// Changes the era, re-pointing make and model when they do not belong to it.
    pub fn set_era(&mut self, era: Era) {
        self.era = era;
        if self.make != OTHER_UNKNOWN && !catalog::makes_for(era).contains(&self.make.as_str()) {
            if let Some(first) = catalog::first_make(era) {
                self.make = first.to_string();
            }
        }
        self.repoint_model();
    }

    /// Changes the make, re-pointing the model when it does not belong to it.
    pub fn set_make(&mut self, make: &str) {
        self.make = make.to_string();
        self.repoint_model();
    }

    fn repoint_model(&mut self) {
        if self.model == OTHER_UNKNOWN {
            return;
        }
        let models = catalog::models_for(self.era, &self.make);
        if !models.is_empty() && !models.contains(&self.model.as_str()) {
            if let Some(first) = catalog::first_model(self.era, &self.make) {
                self.model = first.to_string();
            }
        }
    }

    /// Returns `true` when the draft may be posted.
    #[must_use]
    pub fn can_post(&self) -> bool {
        self.title.trim().chars().count() >= MIN_TITLE_CHARS
            && self.price > 0
            && self.location.trim().chars().count() >= MIN_LOCATION_CHARS
            && !self.make.is_empty()
            && !self.model.is_empty()
    }

    /// Builds the listing this draft describes, or `None` if the gate fails.
    ///
    /// Title, description and location are trimmed; a blank description is
    /// stored as absent.
    #[must_use]
    pub fn to_listing(&self, id: String, created_at: i64) -> Option<Listing> {
        if !self.can_post() {
            return None;
        }

        let description = self.description.trim();
        Some(Listing {
            id,
            created_at,
            era: self.era,
            make: self.make.clone(),
            model: self.model.clone(),
            category: self.category,
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            condition: self.condition,
            price: self.price,
            location: self.location.trim().to_string(),
            postage_available: self.postage_available,
            photos: self.photos.clone(),
        })
    }

    /// Appends encoded photos, dropping any beyond the cap.
    ///
    /// Returns how many were kept.
    pub fn add_photos(&mut self, photos: impl IntoIterator<Item = String>) -> usize {
        let before = self.photos.len();
        let room = MAX_PHOTOS.saturating_sub(before);
        self.photos.extend(photos.into_iter().take(room));
        self.photos.len() - before
    }

    /// Removes the photo at `index`; out-of-range indices are ignored.
    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    pub fn clear_text(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Resets the per-listing fields after a successful post.
    ///
    /// Era, make, model, category and location carry over to the next listing.
    pub fn reset_after_post(&mut self) {
        self.clear_text();
        self.price = DEFAULT_PRICE;
        self.condition = Condition::Used;
        self.postage_available = true;
        self.photos.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> SellDraft {
        SellDraft {
            title: title.to_string(),
            ..SellDraft::default()
        }
    }

    #[test]
    fn title_needs_four_trimmed_characters() {
        assert!(!titled("abc").can_post());
        assert!(!titled("  abc  ").can_post());
        assert!(titled("abcd").can_post());
        assert!(titled(" abcd ").can_post());
    }

    #[test]
    fn price_and_location_gate_posting() {
        let mut draft = titled("Distributor cap");
        draft.price = 0;
        assert!(!draft.can_post());

        draft.price = 1;
        draft.location = " X ".to_string();
        assert!(!draft.can_post());

        draft.location = "York".to_string();
        assert!(draft.can_post());
    }

    #[test]
    fn blocked_draft_builds_no_listing() {
        assert_eq!(titled("abc").to_listing("id".to_string(), 1), None);
    }

    #[test]
    fn listing_fields_are_trimmed() {
        let mut draft = titled("  Lucas coil  ");
        draft.description = "   ".to_string();
        draft.location = " Leeds ".to_string();

        let listing = draft.to_listing("id".to_string(), 7).unwrap();
        assert_eq!(listing.title, "Lucas coil");
        assert_eq!(listing.description, None);
        assert_eq!(listing.location, "Leeds");
        assert_eq!(listing.created_at, 7);
        assert_eq!(listing.category, Category::Electrical);
    }

    #[test]
    fn era_change_repoints_make_and_model() {
        let mut draft = SellDraft::default();
        draft.set_era(Era::Pre1950);
        assert_eq!(draft.make, "Jaguar");
        assert_eq!(draft.model, "SS 100");

        draft.set_era(Era::Seventies);
        assert_eq!(draft.make, "Jaguar");
        assert_eq!(draft.model, "XJ Series 2/3");

        draft.set_make("Lamborghini");
        draft.set_era(Era::Pre1950);
        assert_eq!(draft.make, "Bentley");
        assert_eq!(draft.model, "3.5 Litre");
    }

    #[test]
    fn other_unknown_is_never_repointed() {
        let mut draft = SellDraft::default();
        draft.set_make(OTHER_UNKNOWN);
        draft.model = OTHER_UNKNOWN.to_string();
        draft.set_era(Era::Modern);
        assert_eq!(draft.make, OTHER_UNKNOWN);
        assert_eq!(draft.model, OTHER_UNKNOWN);
    }

    #[test]
    fn photos_are_capped() {
        let mut draft = SellDraft::default();
        assert_eq!(draft.add_photos((0..4).map(|i| format!("p{i}"))), 4);
        assert_eq!(draft.add_photos((4..10).map(|i| format!("p{i}"))), 2);
        assert_eq!(draft.photos.len(), MAX_PHOTOS);

        draft.remove_photo(0);
        draft.remove_photo(42);
        assert_eq!(draft.photos.first().map(String::as_str), Some("p1"));
        assert_eq!(draft.photos.len(), MAX_PHOTOS - 1);
    }

    #[test]
    fn reset_after_post_keeps_vehicle_fields() {
        let mut draft = titled("Weber 40 DCOE");
        draft.set_era(Era::Modern);
        draft.price = 900;
        draft.condition = Condition::Nos;
        draft.postage_available = false;
        draft.location = "Bristol".to_string();
        draft.add_photos(["a".to_string()]);

        draft.reset_after_post();

        assert!(draft.title.is_empty());
        assert_eq!(draft.price, 250);
        assert_eq!(draft.condition, Condition::Used);
        assert!(draft.postage_available);
        assert!(draft.photos.is_empty());
        assert_eq!(draft.era, Era::Modern);
        assert_eq!(draft.location, "Bristol");
    }
}
