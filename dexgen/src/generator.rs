use std::fs;

use anyhow::{
    Context,
    Result,
};
use dexgen_data::DataStore;
use dexgen_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use log::{
    debug,
    info,
    warn,
};

use crate::{
    GeneratorOptions,
    MoveIndex,
    MoveSelector,
    render::{
        render_block,
        render_species,
    },
    splice::{
        SpliceError,
        splice_block,
    },
};

/// Result of rewriting the target script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The block was replaced and the file written.
    Updated,
    /// The start marker was not in the file. Nothing was written.
    MarkerNotFound,
}

/// Generates the species block for the first `options.species_limit` species.
///
/// Every species consumes randomness in dataset order, so the output only depends on the datasets
/// and the state of `prng`.
pub fn generate_block(
    store: &dyn DataStore,
    options: &GeneratorOptions,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<String> {
    let species = store.all_species()?;
    let index = MoveIndex::new(store.all_moves()?);
    let selector = MoveSelector::new(&index);
    debug!(
        "Indexed moves of {} categories, {} valid Normal moves",
        index.categories().count(),
        selector.normal_moves().len(),
    );

    let entries = species
        .iter()
        .take(options.species_limit)
        .map(|species| {
            let moves = selector.select(prng, species.primary_type()).context(format!(
                "failed to select moves for {} (#{})",
                species.name.english, species.id
            ))?;
            Ok(render_species(species, &moves))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(
        "Generated {} of {} species",
        entries.len(),
        species.len()
    );
    Ok(render_block(&options.start_marker, entries))
}

/// Regenerates the species block of the target script in place.
///
/// Reads the target, generates a block with a PRNG seeded from `options.seed`, and writes the
/// spliced content back. If the start marker is missing, the file is left untouched.
pub fn update_target(store: &dyn DataStore, options: &GeneratorOptions) -> Result<UpdateOutcome> {
    let content = fs::read_to_string(&options.target)
        .context(format!("failed to read {}", options.target.display()))?;

    let mut prng = RealPseudoRandomNumberGenerator::new(options.seed);
    info!("Generating with seed {}", prng.initial_seed());
    let block = generate_block(store, options, &mut prng)?;

    let updated = match splice_block(&content, &options.start_marker, &block) {
        Ok(updated) => updated,
        Err(err @ SpliceError::MarkerNotFound { .. }) => {
            warn!("{err} ({})", options.target.display());
            return Ok(UpdateOutcome::MarkerNotFound);
        }
    };
    fs::write(&options.target, updated)
        .context(format!("failed to write {}", options.target.display()))?;
    Ok(UpdateOutcome::Updated)
}
