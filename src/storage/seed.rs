//! Demo listings used when the store is empty or unreadable.
//!
//! The set is fixed, timestamps included, so a "reset demo data" restores it
//! verbatim.

use crate::domain::{Category, Condition, Era, Listing};

/// Reference instant the seed timestamps count back from (2024-06-01T00:00:00Z).
const SEED_EPOCH_MS: i64 = 1_717_200_000_000;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

struct SeedRow {
    id: &'static str,
    days_ago: i64,
    era: Era,
    make: &'static str,
    model: &'static str,
    category: Category,
    title: &'static str,
    description: &'static str,
    condition: Condition,
    price: u32,
    location: &'static str,
    postage_available: bool,
}

const SEED: [SeedRow; 4] = [
    SeedRow {
        id: "seed1",
        days_ago: 6,
        era: Era::Postwar,
        make: "Jaguar",
        model: "E-Type Series 1",
        category: Category::Electrical,
        title: "Smiths speedometer (mph) — excellent face, needs cable",
        description: "Original Smiths unit. Great for E-Type / XK applications. Please check fitment.",
        condition: Condition::Original,
        price: 640,
        location: "London",
        postage_available: true,
    },
    SeedRow {
        id: "seed2",
        days_ago: 4,
        era: Era::Postwar,
        make: "Jaguar",
        model: "XK140",
        category: Category::Electrical,
        title: "Smiths speedo head (mph) — tested",
        description: "Bench-tested. Good needle action. Suitable for XK / early Jaguar applications.",
        condition: Condition::Used,
        price: 495,
        location: "West Sussex",
        postage_available: true,
    },
    SeedRow {
        id: "seed3",
        days_ago: 2,
        era: Era::Modern,
        make: "BMW",
        model: "E30",
        category: Category::Suspension,
        title: "E30 steering rack (good used)",
        description: "No play. Boots intact. Collection preferred.",
        condition: Condition::Used,
        price: 220,
        location: "Manchester",
        postage_available: false,
    },
    SeedRow {
        id: "seed4",
        days_ago: 1,
        era: Era::Modern,
        make: "Ford",
        model: "Escort RS Turbo",
        category: Category::Engine,
        title: "Original RS Turbo Series 2 inlet manifold",
        description: "Original used item. No cracks. Threads good.",
        condition: Condition::Original,
        price: 380,
        location: "Essex",
        postage_available: true,
    },
];

/// Returns the fixed demo listing set, in stored (oldest-first) order.
#[must_use]
pub fn seed_listings() -> Vec<Listing> {
    SEED.iter()
        .map(|row| Listing {
            id: row.id.to_string(),
            created_at: SEED_EPOCH_MS - row.days_ago * DAY_MS,
            era: row.era,
            make: row.make.to_string(),
            model: row.model.to_string(),
            category: row.category,
            title: row.title.to_string(),
            description: Some(row.description.to_string()),
            condition: row.condition,
            price: row.price,
            location: row.location.to_string(),
            postage_available: row.postage_available,
            photos: vec![],
        })
        .collect()
}
