use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

use crate::Type;

/// Reads an optional numeric move field.
///
/// Anything other than a non-negative integer that fits in a `u32` (null, strings, fractions,
/// booleans) becomes [`None`]. The record then fails [`MoveData::is_valid`] and is filtered out of
/// selection instead of failing the whole dataset.
fn deserialize_lenient_stat<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}

fn default_move_type() -> Option<String> {
    Some(Type::DEFAULT_LABEL.to_owned())
}

/// Data about a particular move, as listed in the move dataset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: Option<u32>,
    /// English name, which is the display name in generated scripts.
    pub ename: Option<String>,
    pub cname: Option<String>,
    pub jname: Option<String>,
    /// Elemental category label.
    ///
    /// A missing label is Normal. An explicit `null` stays [`None`], and the move belongs to no
    /// category.
    #[serde(rename = "type", default = "default_move_type")]
    pub move_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_stat")]
    pub power: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_stat")]
    pub accuracy: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient_stat")]
    pub pp: Option<u32>,
}

impl MoveData {
    /// The category label, if the move has one.
    pub fn category(&self) -> Option<&str> {
        self.move_type.as_deref()
    }

    /// Whether the move carries everything a generated move needs: a name, power, and accuracy.
    pub fn is_valid(&self) -> bool {
        self.ename.is_some() && self.power.is_some() && self.accuracy.is_some()
    }
}
