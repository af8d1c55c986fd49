use dexgen_data::MoveData;
use indexmap::IndexMap;
use log::debug;

/// A move that passed validation, with every field a generated script needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub power: u32,
    pub accuracy: u32,
    /// Category label, as it appears in the move dataset.
    pub category: String,
}

impl Move {
    /// Validates a dataset record.
    ///
    /// Returns [`None`] for records missing a name, power, accuracy, or category.
    pub fn from_data(data: &MoveData) -> Option<Self> {
        Some(Self {
            name: data.ename.clone()?,
            power: data.power?,
            accuracy: data.accuracy?,
            category: data.category()?.to_owned(),
        })
    }
}

/// Move records grouped by category.
///
/// Categories iterate in the order they first appear in the dataset, and records keep dataset
/// order within their category. Records with a `null` category can never be looked up, so they are
/// left out.
#[derive(Debug, Default, Clone)]
pub struct MoveIndex {
    moves_by_type: IndexMap<String, Vec<MoveData>>,
}

impl MoveIndex {
    /// Builds the index over the full move dataset.
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = MoveData>,
    {
        let mut moves_by_type = IndexMap::<String, Vec<MoveData>>::new();
        let mut uncategorized = 0;
        for data in moves {
            match data.category() {
                Some(category) => moves_by_type
                    .entry(category.to_owned())
                    .or_default()
                    .push(data),
                None => uncategorized += 1,
            }
        }
        if uncategorized > 0 {
            debug!("Skipped {uncategorized} moves with a null category");
        }
        Self { moves_by_type }
    }

    /// All records of the category, valid or not.
    pub fn moves(&self, category: &str) -> &[MoveData] {
        self.moves_by_type
            .get(category)
            .map(|moves| moves.as_slice())
            .unwrap_or_default()
    }

    /// Whether any record of the category exists.
    pub fn contains(&self, category: &str) -> bool {
        self.moves_by_type.contains_key(category)
    }

    /// Indexed categories, in first-appearance order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.moves_by_type.keys().map(|category| category.as_str())
    }

    /// Valid moves of the category, in dataset order.
    pub fn valid_moves(&self, category: &str) -> Vec<Move> {
        self.moves(category)
            .iter()
            .filter_map(Move::from_data)
            .collect()
    }
}

#[cfg(test)]
mod move_index_test {
    use dexgen_data::MoveData;
    use pretty_assertions::assert_eq;

    use crate::{
        Move,
        MoveIndex,
    };

    fn data(name: Option<&str>, move_type: Option<&str>, power: Option<u32>) -> MoveData {
        MoveData {
            ename: name.map(|name| name.to_owned()),
            move_type: move_type.map(|move_type| move_type.to_owned()),
            power,
            accuracy: Some(100),
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_category_in_first_appearance_order() {
        let index = MoveIndex::new([
            data(Some("Ember"), Some("Fire"), Some(40)),
            data(Some("Tackle"), Some("Normal"), Some(40)),
            data(Some("Flamethrower"), Some("Fire"), Some(90)),
            data(Some("Bubble"), Some("Water"), Some(40)),
        ]);
        assert_eq!(
            index.categories().collect::<Vec<_>>(),
            vec!["Fire", "Normal", "Water"]
        );
        assert_eq!(
            index
                .moves("Fire")
                .iter()
                .map(|data| data.ename.as_deref().unwrap())
                .collect::<Vec<_>>(),
            vec!["Ember", "Flamethrower"]
        );
    }

    #[test]
    fn indexes_moves_without_type_key_as_normal() {
        let data: MoveData =
            serde_json::from_str(r#"{ "ename": "Struggle", "power": 50, "accuracy": 100 }"#)
                .unwrap();
        let index = MoveIndex::new([data]);
        assert!(index.contains("Normal"));
        assert_eq!(index.moves("Normal").len(), 1);
    }

    #[test]
    fn null_typed_moves_never_join_normal_pool() {
        let index = MoveIndex::new([
            data(Some("Mystery"), None, Some(50)),
            data(Some("Tackle"), Some("Normal"), Some(40)),
        ]);
        assert_eq!(index.categories().collect::<Vec<_>>(), vec!["Normal"]);
        assert_eq!(
            index
                .valid_moves("Normal")
                .into_iter()
                .map(|m| m.name)
                .collect::<Vec<_>>(),
            vec!["Tackle"]
        );
    }

    #[test]
    fn missing_category_is_empty() {
        let index = MoveIndex::new([data(Some("Ember"), Some("Fire"), Some(40))]);
        assert!(!index.contains("Ice"));
        assert!(index.moves("Ice").is_empty());
        assert!(index.valid_moves("Ice").is_empty());
    }

    #[test]
    fn filters_invalid_moves() {
        let index = MoveIndex::new([
            data(Some("Growl"), Some("Normal"), None),
            data(None, Some("Normal"), Some(40)),
            data(Some("Tackle"), Some("Normal"), Some(40)),
        ]);
        assert_eq!(
            index.valid_moves("Normal"),
            vec![Move {
                name: "Tackle".to_owned(),
                power: 40,
                accuracy: 100,
                category: "Normal".to_owned(),
            }]
        );
    }
}
