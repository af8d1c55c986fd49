use dexgen_data::Type;
use dexgen_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use log::debug;
use thiserror::Error;

use crate::{
    Move,
    MoveIndex,
    compatibility::compatible_types,
};

/// Error selecting moves for a species.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("cannot sample {requested} {category} moves from a pool of {available}")]
    InsufficientMoves {
        category: String,
        requested: usize,
        available: usize,
    },
}

/// Picks the moveset of every generated species.
///
/// A moveset is [`MoveSelector::OWN_TYPE_MOVES`] moves of the species' primary category followed
/// by [`MoveSelector::COMPATIBLE_MOVES`] moves from its compatible categories. Normal moves pad
/// out both halves when a pool runs short.
pub struct MoveSelector<'i> {
    index: &'i MoveIndex,
    normal_moves: Vec<Move>,
}

impl<'i> MoveSelector<'i> {
    /// Moves of the primary category in every moveset.
    pub const OWN_TYPE_MOVES: usize = 5;
    /// Moves of compatible categories in every moveset.
    pub const COMPATIBLE_MOVES: usize = 5;
    /// Total moves in every moveset.
    pub const MOVESET_SIZE: usize = Self::OWN_TYPE_MOVES + Self::COMPATIBLE_MOVES;
    /// Moves taken from the front of each compatible category.
    pub const MOVES_PER_COMPATIBLE_TYPE: usize = 5;
    /// Normal moves that replace a compatible pool that came up short.
    pub const NORMAL_FALLBACK_POOL_SIZE: usize = 10;

    pub fn new(index: &'i MoveIndex) -> Self {
        Self {
            index,
            normal_moves: index.valid_moves(Type::DEFAULT_LABEL),
        }
    }

    /// Valid Normal moves, used for padding.
    pub fn normal_moves(&self) -> &[Move] {
        &self.normal_moves
    }

    /// Builds the pool of compatible moves for a primary category.
    ///
    /// Takes the first few valid moves of each compatible category, in table order. A pool too
    /// small to sample from is replaced by the first Normal moves.
    pub fn compatible_pool(&self, primary: &str) -> Vec<Move> {
        let mut pool = compatible_types(primary)
            .iter()
            .flat_map(|category| {
                self.index
                    .valid_moves(category)
                    .into_iter()
                    .take(Self::MOVES_PER_COMPATIBLE_TYPE)
            })
            .collect::<Vec<_>>();
        if pool.len() < Self::COMPATIBLE_MOVES {
            pool = self
                .normal_moves
                .iter()
                .take(Self::NORMAL_FALLBACK_POOL_SIZE)
                .cloned()
                .collect();
        }
        pool
    }

    /// Selects the full moveset for a species with the given primary category.
    ///
    /// Always returns exactly [`MoveSelector::MOVESET_SIZE`] moves, own-type moves first.
    pub fn select(
        &self,
        prng: &mut dyn PseudoRandomNumberGenerator,
        primary: &str,
    ) -> Result<Vec<Move>, SelectionError> {
        let own_type_pool = self.index.valid_moves(primary);
        let compatible_pool = self.compatible_pool(primary);
        debug!(
            "Selecting moves for {primary}: {} own-type, {} compatible, {} normal",
            own_type_pool.len(),
            compatible_pool.len(),
            self.normal_moves.len(),
        );

        let mut moves = self.select_own_type(prng, primary, own_type_pool)?;
        moves.extend(self.select_compatible(prng, primary, &compatible_pool)?);
        Ok(moves)
    }

    fn select_own_type(
        &self,
        prng: &mut dyn PseudoRandomNumberGenerator,
        primary: &str,
        pool: Vec<Move>,
    ) -> Result<Vec<Move>, SelectionError> {
        if pool.len() >= Self::OWN_TYPE_MOVES {
            sample(prng, primary, &pool, Self::OWN_TYPE_MOVES)
        } else if !pool.is_empty() {
            let missing = Self::OWN_TYPE_MOVES - pool.len();
            let mut moves = pool;
            moves.extend(sample(
                prng,
                Type::DEFAULT_LABEL,
                &self.normal_moves,
                missing,
            )?);
            Ok(moves)
        } else {
            sample(
                prng,
                Type::DEFAULT_LABEL,
                &self.normal_moves,
                Self::OWN_TYPE_MOVES,
            )
        }
    }

    fn select_compatible(
        &self,
        prng: &mut dyn PseudoRandomNumberGenerator,
        primary: &str,
        pool: &[Move],
    ) -> Result<Vec<Move>, SelectionError> {
        if pool.len() >= Self::COMPATIBLE_MOVES {
            sample(
                prng,
                &format!("{primary}-compatible"),
                pool,
                Self::COMPATIBLE_MOVES,
            )
        } else {
            sample(
                prng,
                Type::DEFAULT_LABEL,
                &self.normal_moves,
                Self::COMPATIBLE_MOVES,
            )
        }
    }
}

fn sample(
    prng: &mut dyn PseudoRandomNumberGenerator,
    category: &str,
    pool: &[Move],
    count: usize,
) -> Result<Vec<Move>, SelectionError> {
    rand_util::sample(prng, pool, count)
        .map(|moves| moves.into_iter().cloned().collect())
        .ok_or_else(|| SelectionError::InsufficientMoves {
            category: category.to_owned(),
            requested: count,
            available: pool.len(),
        })
}

#[cfg(test)]
mod selector_test {
    use assert_matches::assert_matches;
    use dexgen_data::MoveData;
    use dexgen_prng::RealPseudoRandomNumberGenerator;
    use pretty_assertions::assert_eq;

    use crate::{
        MoveIndex,
        MoveSelector,
        SelectionError,
    };

    fn moves(move_type: &str, count: usize) -> Vec<MoveData> {
        (0..count)
            .map(|i| MoveData {
                ename: Some(format!("{move_type} {i}")),
                move_type: Some(move_type.to_owned()),
                power: Some(40 + i as u32),
                accuracy: Some(100),
                ..Default::default()
            })
            .collect()
    }

    fn names(moves: &[crate::Move]) -> Vec<&str> {
        moves.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn compatible_pool_takes_first_moves_of_each_category() {
        let index = MoveIndex::new(
            [moves("Ice", 7), moves("Rock", 2), moves("Normal", 5)]
                .into_iter()
                .flatten(),
        );
        let selector = MoveSelector::new(&index);
        assert_eq!(
            names(&selector.compatible_pool("Steel")),
            vec!["Ice 0", "Ice 1", "Ice 2", "Ice 3", "Ice 4", "Rock 0", "Rock 1"]
        );
    }

    #[test]
    fn short_compatible_pool_is_replaced_by_normal_moves() {
        let index = MoveIndex::new(
            [moves("Rock", 3), moves("Normal", 12)]
                .into_iter()
                .flatten(),
        );
        let selector = MoveSelector::new(&index);
        let pool = selector.compatible_pool("Steel");
        assert_eq!(pool.len(), 10);
        assert!(pool.iter().all(|m| m.category == "Normal"));
        assert_eq!(pool[9].name, "Normal 9");
    }

    #[test]
    fn selects_ten_distinct_moves_from_full_pools() {
        let index = MoveIndex::new(
            [moves("Fire", 8), moves("Ground", 6), moves("Normal", 10)]
                .into_iter()
                .flatten(),
        );
        let selector = MoveSelector::new(&index);
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(42));
        let selected = selector.select(&mut prng, "Fire").unwrap();
        assert_eq!(selected.len(), MoveSelector::MOVESET_SIZE);
        assert!(selected[..5].iter().all(|m| m.category == "Fire"));
        assert!(selected[5..].iter().all(|m| m.category == "Ground"));
        let mut distinct = names(&selected);
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn tops_up_short_own_type_pool_with_normal_moves() {
        let index = MoveIndex::new(
            [moves("Dragon", 2), moves("Normal", 5)]
                .into_iter()
                .flatten(),
        );
        let selector = MoveSelector::new(&index);
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(1));
        let selected = selector.select(&mut prng, "Dragon").unwrap();
        assert_eq!(selected.len(), 10);
        assert_eq!(names(&selected[..2]), vec!["Dragon 0", "Dragon 1"]);
        assert!(selected[2..5].iter().all(|m| m.category == "Normal"));
        // Two Dragon moves cannot fill the compatible half, so Normal covers it.
        assert!(selected[5..].iter().all(|m| m.category == "Normal"));
    }

    #[test]
    fn falls_back_to_exactly_five_normal_moves() {
        let index = MoveIndex::new(moves("Normal", 5));
        let selector = MoveSelector::new(&index);
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(42));
        let first = selector.select(&mut prng, "Ghost").unwrap();
        assert_eq!(first.len(), 10);
        assert!(first.iter().all(|m| m.category == "Normal"));

        let mut prng = RealPseudoRandomNumberGenerator::new(Some(42));
        assert_eq!(selector.select(&mut prng, "Ghost").unwrap(), first);
    }

    #[test]
    fn ignores_invalid_moves_in_every_pool() {
        let mut data = moves("Water", 5);
        data.extend(moves("Normal", 5));
        data.push(MoveData {
            ename: Some("Splash".to_owned()),
            move_type: Some("Water".to_owned()),
            power: None,
            accuracy: Some(100),
            ..Default::default()
        });
        data.push(MoveData {
            ename: None,
            move_type: Some("Normal".to_owned()),
            power: Some(40),
            accuracy: Some(100),
            ..Default::default()
        });
        let index = MoveIndex::new(data);
        let selector = MoveSelector::new(&index);
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(3));
        for _ in 0..20 {
            let selected = selector.select(&mut prng, "Water").unwrap();
            assert!(selected.iter().all(|m| m.name != "Splash"));
        }
    }

    #[test]
    fn fails_when_normal_pool_cannot_cover_shortage() {
        let index = MoveIndex::new(moves("Normal", 3));
        let selector = MoveSelector::new(&index);
        let mut prng = RealPseudoRandomNumberGenerator::new(Some(42));
        assert_matches!(
            selector.select(&mut prng, "Psychic"),
            Err(SelectionError::InsufficientMoves {
                requested: 5,
                available: 3,
                ..
            })
        );
    }
}
