use anyhow::{
    Error,
    Result,
};
use dexgen_data::{
    DataStore,
    MoveData,
    SpeciesData,
};

/// In-memory [`DataStore`] for tests.
///
/// Datasets are built up with fixtures instead of being read from disk. A store can also be told
/// to fail, to exercise error propagation.
#[derive(Default)]
pub struct TestDataStore {
    species: Vec<SpeciesData>,
    moves: Vec<MoveData>,
    failure: Option<String>,
}

impl TestDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species<I>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = SpeciesData>,
    {
        self.species.extend(species);
        self
    }

    pub fn with_moves<I>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = MoveData>,
    {
        self.moves.extend(moves);
        self
    }

    /// Makes every lookup fail with the given message.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_owned());
        self
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(Error::msg(message.clone())),
            None => Ok(()),
        }
    }
}

impl DataStore for TestDataStore {
    fn all_species(&self) -> Result<Vec<SpeciesData>> {
        self.check()?;
        Ok(self.species.clone())
    }

    fn all_moves(&self) -> Result<Vec<MoveData>> {
        self.check()?;
        Ok(self.moves.clone())
    }
}
