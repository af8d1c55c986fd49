use std::str::FromStr;

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental category of a species or move.
///
/// Datasets carry categories as plain labels; records keep the label and convert with
/// [`Type::from_label`] where a closed set is needed.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Label of the category every unknown or missing label falls back to.
    pub const DEFAULT_LABEL: &'static str = "Normal";

    /// Converts a dataset label to a [`Type`], falling back to [`Type::Normal`] for labels outside
    /// the known set.
    ///
    /// Matching is exact. Parsing alone ignores case, so the parsed label is compared back against
    /// the input.
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label)
            .ok()
            .filter(|parsed| parsed.to_string() == label)
            .unwrap_or_default()
    }
}
