//! Static vehicle and parts taxonomy.
//!
//! The catalog is fixed data: four eras, thirteen part categories and a table of
//! makes and models available in each era. Lookups never fail; an era or make the
//! table does not know about simply yields an empty list.

use serde::{Deserialize, Serialize};

/// Selection value offered for makes and models that are not in the table.
pub const OTHER_UNKNOWN: &str = "Other / Unknown";

/// Top-level time period of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "pre1950")]
    Pre1950,
    #[serde(rename = "50_70")]
    Postwar,
    #[serde(rename = "70_80")]
    Seventies,
    #[serde(rename = "80_2000")]
    Modern,
}

impl Era {
    /// All eras in display order.
    pub const ALL: [Self; 4] = [Self::Pre1950, Self::Postwar, Self::Seventies, Self::Modern];

    /// Stable identifier used in storage and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pre1950 => "pre1950",
            Self::Postwar => "50_70",
            Self::Seventies => "70_80",
            Self::Modern => "80_2000",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pre1950 => "Pre-1950",
            Self::Postwar => "1950–1970",
            Self::Seventies => "1970–1980",
            Self::Modern => "1980–2000",
        }
    }

    #[must_use]
    pub const fn meta(self) -> &'static str {
        match self {
            Self::Pre1950 => "veteran & pre-war",
            Self::Postwar => "golden era",
            Self::Seventies => "analogue icons",
            Self::Modern => "modern classics",
        }
    }

    #[must_use]
    pub const fn years(self) -> &'static str {
        match self {
            Self::Pre1950 => "— 1949",
            Self::Postwar => "1950 — 1970",
            Self::Seventies => "1970 — 1980",
            Self::Modern => "1980 — 2000",
        }
    }

    /// Parses an era from its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|era| era.id() == id)
    }
}

/// Part category.
///
/// Listings store the identifier; search and breadcrumbs use the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Engine,
    Cooling,
    Transmission,
    Suspension,
    Brakes,
    Electrical,
    Body,
    Interior,
    Glass,
    Wheels,
    Hardware,
    Literature,
    Misc,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 13] = [
        Self::Engine,
        Self::Cooling,
        Self::Transmission,
        Self::Suspension,
        Self::Brakes,
        Self::Electrical,
        Self::Body,
        Self::Interior,
        Self::Glass,
        Self::Wheels,
        Self::Hardware,
        Self::Literature,
        Self::Misc,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Cooling => "cooling",
            Self::Transmission => "transmission",
            Self::Suspension => "suspension",
            Self::Brakes => "brakes",
            Self::Electrical => "electrical",
            Self::Body => "body",
            Self::Interior => "interior",
            Self::Glass => "glass",
            Self::Wheels => "wheels",
            Self::Hardware => "hardware",
            Self::Literature => "literature",
            Self::Misc => "misc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Engine => "Engine & Fuel",
            Self::Cooling => "Cooling",
            Self::Transmission => "Transmission",
            Self::Suspension => "Suspension & Steering",
            Self::Brakes => "Brakes",
            Self::Electrical => "Electrical & Ignition",
            Self::Body => "Body Panels",
            Self::Interior => "Interior & Trim",
            Self::Glass => "Glass & Seals",
            Self::Wheels => "Wheels",
            Self::Hardware => "Hardware & Fixings",
            Self::Literature => "Literature / Tools",
            Self::Misc => "Misc",
        }
    }

    #[must_use]
    pub const fn meta(self) -> &'static str {
        match self {
            Self::Engine => "carb, injection, ancillaries",
            Self::Cooling => "rads, hoses, fans",
            Self::Transmission => "gearbox, diff, clutch",
            Self::Suspension => "springs, shocks, racks",
            Self::Brakes => "calipers, discs, hydraulics",
            Self::Electrical => "looms, ignition, lights",
            Self::Body => "doors, wings, bonnets",
            Self::Interior => "seats, trim, switches",
            Self::Glass => "rubbers, screens, seals",
            Self::Wheels => "wheels, hubs, spinners",
            Self::Hardware => "brackets, clips, fasteners",
            Self::Literature => "manuals, tools, specials",
            Self::Misc => "other parts",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

type MakeTable = &'static [(&'static str, &'static [&'static str])];

const PRE_1950: MakeTable = &[
    ("Bentley", &["3.5 Litre", "4.25 Litre"]),
    ("Bugatti", &["Type 35", "Type 57"]),
    ("Jaguar", &["SS 100", "SS 90"]),
    ("MG", &["TA", "TB", "TC"]),
    ("Alfa Romeo", &["6C", "8C (pre-war)"]),
    ("Rolls-Royce", &["Phantom", "Wraith (pre-war)"]),
];

const SIXTIES: MakeTable = &[
    ("Jaguar", &["XK120", "XK140", "XK150", "E-Type Series 1", "E-Type Series 2"]),
    ("Porsche", &["356", "911 (early)"]),
    ("Mercedes", &["300 SL", "230 SL (Pagoda)"]),
    ("Ferrari", &["250 (series)", "275 (series)"]),
    ("Aston Martin", &["DB2/4", "DB4", "DB5", "DB6"]),
    ("Ford", &["Escort Mk1", "Cortina Mk1/2", "Mustang (early)"]),
    ("Chevrolet", &["Corvette C1", "Corvette C2"]),
    ("Mini", &["Mini (classic)"]),
    ("Alfa Romeo", &["Giulia (105)", "Spider (Duetto)"]),
    ("BMW", &["2002", "E9 3.0 CS (early)"]),
];

const SEVENTIES: MakeTable = &[
    ("Porsche", &["911 SC", "930 Turbo", "928"]),
    ("Ferrari", &["308", "512 BB"]),
    ("BMW", &["E9 3.0 CS", "E21 3-Series"]),
    ("Ford", &["Escort Mk2", "Capri", "RS2000"]),
    ("Jaguar", &["XJ Series 2/3", "XJS (early)"]),
    ("Mercedes", &["W116 S-Class", "R107 SL"]),
    ("Lamborghini", &["Countach (early)"]),
    ("Alfa Romeo", &["Alfetta", "GTV (116)"]),
];

const MODERN: MakeTable = &[
    ("Ford", &["Escort RS Turbo", "Sierra Cosworth", "Focus (early)"]),
    ("BMW", &["E30", "E36", "E46", "E34 5-Series"]),
    ("Porsche", &["964", "993", "996", "944", "928 (late)"]),
    ("Ferrari", &["348", "355", "360 (early)"]),
    ("Mercedes", &["W124", "R129 SL", "190E (W201)"]),
    ("Jaguar", &["XJ40", "X300", "XJS", "XK8 (early)"]),
    ("Audi", &["Quattro (Ur)", "B5 S4 (late 90s)"]),
    ("Volkswagen", &["Golf GTI Mk2/3", "Corrado"]),
    ("Subaru", &["Impreza (classic)"]),
];

const fn table_for(era: Era) -> MakeTable {
    match era {
        Era::Pre1950 => PRE_1950,
        Era::Postwar => SIXTIES,
        Era::Seventies => SEVENTIES,
        Era::Modern => MODERN,
    }
}

/// Returns the makes available in an era, sorted alphabetically.
#[must_use]
pub fn makes_for(era: Era) -> Vec<&'static str> {
    let mut makes: Vec<&'static str> = table_for(era).iter().map(|(make, _)| *make).collect();
    makes.sort_unstable();
    makes
}

/// Returns the models of a make within an era, sorted alphabetically.
///
/// Unknown makes (including [`OTHER_UNKNOWN`]) yield an empty list.
#[must_use]
pub fn models_for(era: Era, make: &str) -> Vec<&'static str> {
    let mut models: Vec<&'static str> = table_for(era)
        .iter()
        .find(|(name, _)| *name == make)
        .map(|(_, models)| models.to_vec())
        .unwrap_or_default();
    models.sort_unstable();
    models
}

/// First make of an era in catalog order, used when re-pointing a draft.
#[must_use]
pub fn first_make(era: Era) -> Option<&'static str> {
    table_for(era).first().map(|(make, _)| *make)
}

/// First model of a make in catalog order.
#[must_use]
pub fn first_model(era: Era, make: &str) -> Option<&'static str> {
    table_for(era)
        .iter()
        .find(|(name, _)| *name == make)
        .and_then(|(_, models)| models.first().copied())
}
