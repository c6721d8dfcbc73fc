//! Static location registry.
//!
//! Maps the short location codes used in URLs to the data-mart table backing
//! each city. Table identifiers cannot be bound as SQL parameters, so every
//! identifier that reaches the query layer must come from this fixed set.

/// One entry in the static location set. Created at compile time, never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationEntry {
    pub code: &'static str,
    pub table_name: &'static str,
    pub display_name: &'static str,
}

/// Every location served by the data mart, one detail table per city.
const LOCATIONS: &[LocationEntry] = &[
    LocationEntry {
        code: "hn",
        table_name: "dm_hanoi",
        display_name: "Ha Noi",
    },
    LocationEntry {
        code: "dn",
        table_name: "dm_danang",
        display_name: "Da Nang",
    },
    LocationEntry {
        code: "hcm",
        table_name: "dm_hcm",
        display_name: "Ho Chi Minh City",
    },
];

/// Exact-match lookup of a location code. No trimming, no case folding.
pub fn resolve(code: &str) -> Option<&'static LocationEntry> {
    LOCATIONS.iter().find(|entry| entry.code == code)
}

/// All known locations in registration order (used by the home page).
pub fn all() -> &'static [LocationEntry] {
    LOCATIONS
}
