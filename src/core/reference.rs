//! TEDB internal identifiers for member states and reduced-rate categories.
//!
//! Both tables are sorted static slices, searched by binary search, and
//! never change at runtime.

use std::fmt;

use super::error::TedbError;

/// Which reference table a lookup went against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    MemberState,
    Category,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemberState => write!(f, "member state"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// An immutable key → TEDB id mapping.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    kind: TableKind,
    entries: &'static [(&'static str, u32)],
}

impl ReferenceTable {
    /// Which table this is.
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Look up the TEDB id for `key`. Keys are matched case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns [`TedbError::UnknownKey`] if `key` is not in the table.
    pub fn lookup(&self, key: &str) -> Result<u32, TedbError> {
        self.get(key).ok_or_else(|| TedbError::UnknownKey {
            table: self.kind,
            key: key.to_string(),
        })
    }

    /// Like [`lookup`](Self::lookup), without the error.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.entries
            .binary_search_by(|(k, _)| (*k).cmp(key))
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// EU member states (plus XI, Northern Ireland).
pub static MEMBER_STATES: ReferenceTable = ReferenceTable {
    kind: TableKind::MemberState,
    entries: MEMBER_STATE_IDS,
};

/// Reduced-rate categories, keyed by snake_case name.
pub static CATEGORIES: ReferenceTable = ReferenceTable {
    kind: TableKind::Category,
    entries: CATEGORY_IDS,
};

/// Look up a member state id by country code (e.g. "ES" → 10).
pub fn member_state_id(country_code: &str) -> Result<u32, TedbError> {
    MEMBER_STATES.lookup(country_code)
}

/// Look up a category id by name (e.g. "foodstuffs" → 1).
pub fn category_id(category: &str) -> Result<u32, TedbError> {
    CATEGORIES.lookup(category)
}

/// TEDB uses EL for Greece. Id 13 (UK) is not offered since Brexit.
/// Sorted for binary search.
const MEMBER_STATE_IDS: &[(&str, u32)] = &[
    ("AT", 1),
    ("BE", 2),
    ("BG", 3),
    ("CY", 4),
    ("CZ", 5),
    ("DE", 6),
    ("DK", 7),
    ("EE", 8),
    ("EL", 9),
    ("ES", 10),
    ("FI", 11),
    ("FR", 12),
    ("HR", 14),
    ("HU", 15),
    ("IE", 16),
    ("IT", 17),
    ("LT", 18),
    ("LU", 19),
    ("LV", 20),
    ("MT", 21),
    ("NL", 22),
    ("PL", 23),
    ("PT", 24),
    ("RO", 25),
    ("SE", 26),
    ("SI", 27),
    ("SK", 28),
    ("XI", 30),
];

/// Sorted for binary search.
const CATEGORY_IDS: &[(&str, u32)] = &[
    ("accommodation_in_hotels", 20),
    ("admission_to_amusement_parks", 11),
    ("admission_to_cultural_services", 10),
    ("admission_to_sports_events", 22),
    ("agricultural_inputs", 18),
    ("agricultural_services", 19),
    ("bicycles_and_electric_bicycles", 43),
    ("books", 7),
    ("broadcasting_services", 39),
    ("children_car_seats", 5),
    ("children_clothing_and_footwear", 35),
    ("collectors_items_and_antiques", 47),
    ("district_heating", 38),
    ("domestic_care_services", 31),
    ("e_books", 40),
    ("e_newspapers", 41),
    ("e_periodicals", 42),
    ("firewood", 34),
    ("foodstuffs", 1),
    ("hairdressing", 32),
    ("live_animals", 48),
    ("live_plants_and_other_floricultural_products", 33),
    ("medical_and_dental_care", 26),
    ("medical_equipment_for_disabled_persons", 4),
    ("minor_repairing_of_bicycles", 28),
    ("minor_repairing_of_clothing_and_household_linen", 30),
    ("minor_repairing_of_shoes_and_leather_goods", 29),
    ("newspapers", 8),
    ("pay_tv_cable_tv", 12),
    ("periodicals", 9),
    ("pharmaceutical_products", 3),
    ("renovation_of_private_dwellings", 16),
    ("rental_of_bicycles", 44),
    ("restaurant_and_catering_services", 21),
    ("social_housing", 15),
    ("social_services", 24),
    ("solar_panels", 45),
    ("street_cleaning_refuse_collection", 27),
    ("supplies_by_undertakers_and_cremation_services", 25),
    ("supply_of_electricity", 36),
    ("supply_of_heating_and_cooling", 49),
    ("supply_of_natural_gas", 37),
    ("transport_of_passengers", 6),
    ("tv_licence", 13),
    ("use_of_sporting_facilities", 23),
    ("water_supplies", 2),
    ("window_cleaning_private_households", 17),
    ("works_of_art", 46),
    ("writers_composers", 14),
];
