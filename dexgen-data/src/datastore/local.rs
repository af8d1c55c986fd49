use std::{
    fs::File,
    io::BufReader,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Error,
    Result,
};
use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    DataStore,
    MoveData,
    SpeciesData,
};

/// An implementation of [`DataStore`] that reads both datasets from disk.
///
/// Both files are read once, on construction.
pub struct LocalDataStore {
    root: PathBuf,
    species: Vec<SpeciesData>,
    moves: Vec<MoveData>,
}

impl LocalDataStore {
    /// Species dataset file name.
    pub const SPECIES_FILE: &'static str = "pokedex.json";
    /// Move dataset file name.
    pub const MOVES_FILE: &'static str = "moves.json";

    /// Creates a new instance of [`LocalDataStore`] that reads the default dataset files from the
    /// given root directory.
    ///
    /// Fails if the path does not point to a directory, or if either dataset is missing or
    /// malformed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::with_files(root, Self::SPECIES_FILE, Self::MOVES_FILE)
    }

    /// Creates a new instance of [`LocalDataStore`] with custom dataset file names, relative to
    /// the root directory.
    pub fn with_files<P: AsRef<Path>>(root: P, species_file: &str, moves_file: &str) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }
        let species: Vec<SpeciesData> = read_json(&root.join(species_file), "species")?;
        let moves: Vec<MoveData> = read_json(&root.join(moves_file), "move")?;
        debug!(
            "Loaded {} species and {} moves from {}",
            species.len(),
            moves.len(),
            root.display(),
        );
        Ok(Self {
            root,
            species,
            moves,
        })
    }

    /// The directory the datasets were read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, dataset: &str) -> Result<T> {
    let file = File::open(path).context(format!(
        "failed to read {dataset} dataset at {}",
        path.display()
    ))?;
    serde_json::from_reader(BufReader::new(file)).context(format!(
        "failed to parse {dataset} dataset at {}",
        path.display()
    ))
}

impl DataStore for LocalDataStore {
    fn all_species(&self) -> Result<Vec<SpeciesData>> {
        Ok(self.species.clone())
    }

    fn all_moves(&self) -> Result<Vec<MoveData>> {
        Ok(self.moves.clone())
    }
}
