//! The fixed people-relationship vocabulary and its lookup table.

use std::collections::{BTreeMap, BTreeSet};

/// Wikidata property identifiers paired with their relationship names.
///
/// This is the complete allow-list used for people-relationship extraction;
/// the identifiers and names are fixed and must not drift.
pub const PEOPLE_RELATIONS: [(&str, &str); 13] = [
    ("P17", "hasCountry"),
    ("P19", "hasBirthPlace"),
    ("P20", "hasDeathPlace"),
    ("P21", "hasGender"),
    ("P22", "hasFather"),
    ("P25", "hasMother"),
    ("P26", "hasSpouse"),
    ("P27", "hasNationality"),
    ("P40", "hasChild"),
    ("P131", "isLocatedIn"),
    ("P150", "containsLocation"),
    ("P3373", "hasSibling"),
    ("P3448", "hasStepParent"),
];

/// Read-only mapping from compact property identifiers to relationship names.
///
/// The table is built once and passed explicitly into the router; it carries
/// no interior mutability and no global state.
///
/// # Examples
///
/// ```
/// use kindred_core::PredicateTable;
///
/// let table = PredicateTable::people();
/// assert_eq!(table.lookup("P17"), Some("hasCountry"));
/// assert_eq!(table.lookup("P999"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredicateTable {
    entries: BTreeMap<String, String>,
}

impl PredicateTable {
    /// Build the fixed people-relationship table ([`PEOPLE_RELATIONS`]).
    #[must_use]
    pub fn people() -> Self {
        Self::from_pairs(
            PEOPLE_RELATIONS
                .iter()
                .map(|(id, name)| ((*id).to_owned(), (*name).to_owned())),
        )
    }

    /// Build a table from arbitrary identifier/name pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Resolve a property identifier to its relationship name.
    #[must_use]
    pub fn lookup(&self, predicate: &str) -> Option<&str> {
        self.entries.get(predicate).map(String::as_str)
    }

    /// Iterate the distinct relationship names in stable order.
    ///
    /// Each name corresponds to exactly one output channel in fan-out mode,
    /// so duplicates collapse even if two identifiers map to the same name.
    pub fn relation_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .values()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// Number of mapped property identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table maps no identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
