use std::sync::LazyLock;

use indexmap::IndexMap;

/// Categories a species draws its "compatible" moves from, keyed by its primary category.
///
/// This is a selection source for generated movesets, not a type chart. Order within each list is
/// significant: the compatible pool is built by walking it front to back.
const COMPATIBLE_TYPES_TABLE: &[(&str, &[&str])] = &[
    ("Normal", &["Fighting", "Flying", "Ground", "Rock", "Steel"]),
    ("Fire", &["Fighting", "Ground", "Rock", "Steel"]),
    ("Water", &["Ground", "Rock", "Steel"]),
    ("Electric", &["Flying", "Ground", "Rock", "Steel"]),
    ("Grass", &["Fighting", "Ground", "Rock"]),
    ("Ice", &["Flying", "Ground", "Rock", "Steel"]),
    ("Fighting", &["Normal", "Rock", "Steel", "Ice", "Dark"]),
    ("Poison", &["Grass", "Fairy"]),
    ("Ground", &["Fire", "Electric", "Poison", "Rock", "Steel"]),
    ("Flying", &["Grass", "Fighting", "Bug"]),
    ("Psychic", &["Fighting", "Poison"]),
    ("Bug", &["Grass", "Psychic", "Dark"]),
    ("Rock", &["Fire", "Ice", "Flying", "Bug"]),
    ("Ghost", &["Psychic", "Ghost"]),
    ("Dragon", &["Dragon"]),
    ("Dark", &["Psychic", "Ghost"]),
    ("Steel", &["Ice", "Rock"]),
];

static COMPATIBLE_TYPES: LazyLock<IndexMap<&str, &[&str]>> =
    LazyLock::new(|| IndexMap::from_iter(COMPATIBLE_TYPES_TABLE.iter().copied()));

const FALLBACK_COMPATIBLE_TYPES: &[&str] = &["Normal"];

/// Returns the compatible categories for a primary category.
///
/// Primary categories outside the table (Fairy, or labels unknown to the dataset) draw from Normal.
pub fn compatible_types(primary: &str) -> &'static [&'static str] {
    COMPATIBLE_TYPES
        .get(primary)
        .copied()
        .unwrap_or(FALLBACK_COMPATIBLE_TYPES)
}
