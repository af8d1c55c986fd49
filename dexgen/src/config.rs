use std::path::PathBuf;

use anyhow::Result;
use dexgen_data::LocalDataStore;
use serde::{
    Deserialize,
    Serialize,
};

/// Options for a generation run.
///
/// The defaults describe the project layout the generator was written for: datasets under `data/`,
/// and the species table of `scripts/pokemon_data.gd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Directory holding both datasets.
    pub data_dir: PathBuf,
    /// Species dataset file name, relative to `data_dir`.
    pub species_file: String,
    /// Move dataset file name, relative to `data_dir`.
    pub moves_file: String,
    /// Script rewritten in place.
    pub target: PathBuf,
    /// Text that opens the block to replace. Also opens the generated block.
    pub start_marker: String,
    /// Number of species taken from the front of the species dataset.
    pub species_limit: usize,
    /// PRNG seed.
    ///
    /// [`None`] draws a fresh seed, which is logged so the run can be replayed.
    pub seed: Option<u64>,
}

impl GeneratorOptions {
    /// Species covered by default: the first two generations.
    pub const DEFAULT_SPECIES_LIMIT: usize = 251;
    pub const DEFAULT_SEED: u64 = 42;

    /// Opens the datasets these options point at.
    pub fn data_store(&self) -> Result<LocalDataStore> {
        LocalDataStore::with_files(&self.data_dir, &self.species_file, &self.moves_file)
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            species_file: LocalDataStore::SPECIES_FILE.to_owned(),
            moves_file: LocalDataStore::MOVES_FILE.to_owned(),
            target: PathBuf::from("scripts/pokemon_data.gd"),
            start_marker: "var Pokemons = {".to_owned(),
            species_limit: Self::DEFAULT_SPECIES_LIMIT,
            seed: Some(Self::DEFAULT_SEED),
        }
    }
}
