//! End-to-end flows through a session backed by the JSON listing file.

use spareshub::app::{Choice, FunnelAction, Route, Step};
use spareshub::domain::{Category, Era};
use spareshub::sell::DraftEdit;
use spareshub::storage::{seed_listings, JsonListingStore, ListingStore};
use spareshub::ui::PageView;
use spareshub::{Event, Session, Theme};
use tempfile::TempDir;

fn open_session(dir: &TempDir) -> Session<JsonListingStore> {
    let store = JsonListingStore::new(dir.path().join("listings.json")).unwrap();
    Session::new(store, Theme::default())
}

fn advance(choice: Choice) -> Event {
    Event::Funnel(FunnelAction::Advance(choice))
}

#[test]
fn part_search_under_a_make_finds_both_speedos() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir);

    session.dispatch(&advance(Choice::Era(Era::Postwar)));
    session.dispatch(&advance(Choice::Make("Jaguar".to_string())));
    session.dispatch(&Event::Funnel(FunnelAction::SetQuery("speedo".to_string())));

    let result = session.state().query();
    let ids: Vec<&str> = result.listings.iter().map(|listing| listing.id.as_str()).collect();
    assert_eq!(ids, ["seed2", "seed1"]);
    assert_eq!((result.min_price, result.max_price), (495, 640));

    let PageView::Browse(browse) = session.viewmodel().page else {
        panic!("expected browse page");
    };
    let matches = browse.instant_matches.expect("query shows instant matches");
    assert_eq!(matches.total, 2);
    assert!(matches.show_view_all);
    assert_eq!(matches.items[0].id, "seed2");
    assert_eq!(matches.items[0].highlight_ranges, vec![(7, 13)]);
}

#[test]
fn open_results_then_narrow_by_category() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir);

    session.dispatch(&advance(Choice::Era(Era::Postwar)));
    session.dispatch(&Event::Funnel(FunnelAction::OpenResults));
    assert_eq!(session.state().selection.step, Step::Results);
    assert_eq!(session.state().query().len(), 2);

    session.dispatch(&Event::Funnel(FunnelAction::Back));
    assert_eq!(session.state().selection.step, Step::Category);
    session.dispatch(&advance(Choice::Category(Category::Engine)));

    let PageView::Browse(browse) = session.viewmodel().page else {
        panic!("expected browse page");
    };
    let results = browse.results.expect("results step lists parts");
    assert_eq!(results.count, 0);
    assert!(results.empty_state.is_some());
}

#[test]
fn posted_listing_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir);

    session.dispatch(&Event::ShowSell);
    session.dispatch(&Event::EditDraft(DraftEdit::Title("Lucas 3AL alternator".to_string())));
    session.dispatch(&Event::EditDraft(DraftEdit::Price(85)));
    session.dispatch(&Event::PostListing);

    let Route::Listing(id) = session.state().route.clone() else {
        panic!("posting opens the new listing");
    };

    let reopened = open_session(&dir);
    let listings = reopened.state().listings.clone();
    assert_eq!(listings.len(), 5);
    assert_eq!(listings[0].id, id);
    assert_eq!(listings[0].price, 85);
    assert!(listings[0].created_at > listings[1].created_at);
}

#[test]
fn title_needs_four_characters_to_post() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir);

    session.dispatch(&Event::ShowSell);
    session.dispatch(&Event::EditDraft(DraftEdit::Title("  Cap ".to_string())));
    session.dispatch(&Event::PostListing);
    assert_eq!(session.state().route, Route::Sell);
    assert_eq!(session.store().load_all().len(), 4);

    session.dispatch(&Event::EditDraft(DraftEdit::Title("Caps".to_string())));
    session.dispatch(&Event::PostListing);
    assert!(matches!(session.state().route, Route::Listing(_)));
    assert_eq!(session.store().load_all().len(), 5);
}

#[test]
fn demo_reset_restores_seed_and_funnel() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir);

    session.dispatch(&Event::EditDraft(DraftEdit::Title("Wire wheel spinner".to_string())));
    session.dispatch(&Event::PostListing);
    session.dispatch(&Event::ShowBrowse);
    session.dispatch(&advance(Choice::Era(Era::Modern)));
    session.dispatch(&Event::Funnel(FunnelAction::SetQuery("steering".to_string())));

    session.dispatch(&Event::ResetDemoData);

    let state = session.state();
    assert_eq!(state.listings, seed_listings());
    assert_eq!(session.store().load_all(), seed_listings());
    assert_eq!(state.selection.step, Step::Era);
    assert!(state.selection.query.is_empty());
    assert_eq!(state.route, Route::Browse);
}

#[test]
fn corrupt_listing_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("listings.json"), "{ not json").unwrap();

    let session = open_session(&dir);
    assert_eq!(session.state().listings, seed_listings());
}

#[test]
fn unknown_listing_id_renders_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(&dir);

    session.dispatch(&Event::OpenListing("nope".to_string()));
    assert!(matches!(session.viewmodel().page, PageView::NotFound(_)));

    let frame = spareshub::ui::render(session.state(), 80);
    assert!(!frame.is_empty());
}
