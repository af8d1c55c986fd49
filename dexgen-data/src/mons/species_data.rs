use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

use crate::Type;

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_base_stat() -> u16 {
    50
}

/// Localized names of a species.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesName {
    /// English name, which is the display name in generated scripts.
    pub english: String,
    pub japanese: Option<String>,
    pub chinese: Option<String>,
    pub french: Option<String>,
}

/// Base attributes of a species.
///
/// Attributes missing from the dataset default to 50.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "HP", default = "default_base_stat")]
    pub hp: u16,
    #[serde(rename = "Attack", default = "default_base_stat")]
    pub attack: u16,
    #[serde(rename = "Defense", default = "default_base_stat")]
    pub defense: u16,
    #[serde(rename = "Sp. Attack", default = "default_base_stat")]
    pub sp_attack: u16,
    #[serde(rename = "Sp. Defense", default = "default_base_stat")]
    pub sp_defense: u16,
    #[serde(rename = "Speed", default = "default_base_stat")]
    pub speed: u16,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            hp: default_base_stat(),
            attack: default_base_stat(),
            defense: default_base_stat(),
            sp_attack: default_base_stat(),
            sp_defense: default_base_stat(),
            speed: default_base_stat(),
        }
    }
}

/// Data about a particular species, as listed in the species dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Dex number, which also keys the species in generated scripts.
    pub id: u32,
    pub name: SpeciesName,
    /// Elemental categories, in order. The first is the primary category. A missing or `null`
    /// list is empty.
    #[serde(rename = "type", default, deserialize_with = "deserialize_null_as_empty")]
    pub types: Vec<String>,
    /// Base attributes.
    #[serde(default)]
    pub base: BaseStats,
}

impl SpeciesData {
    /// The primary category label.
    ///
    /// A species without categories is treated as Normal.
    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(|label| label.as_str())
            .unwrap_or(Type::DEFAULT_LABEL)
    }
}
