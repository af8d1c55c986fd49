use anyhow::Result;

use crate::{
    MoveData,
    SpeciesData,
};

/// Source of the species and move datasets.
///
/// This trait can be implemented for different data sources, such as files on disk or fixtures
/// built in memory.
pub trait DataStore {
    /// Gets all species, in dataset order.
    fn all_species(&self) -> Result<Vec<SpeciesData>>;
    /// Gets all moves, in dataset order.
    fn all_moves(&self) -> Result<Vec<MoveData>>;
}
