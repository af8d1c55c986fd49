//! Generates the species table of a game script from static species and move datasets.
//!
//! The pipeline indexes the move dataset by category, picks ten moves for every species with a
//! replayable PRNG, renders each species as a script literal, and splices the rendered block over
//! the existing one in the target file.

pub mod compatibility;
pub mod config;
pub mod generator;
pub mod move_index;
pub mod render;
pub mod selector;
pub mod splice;

pub use config::GeneratorOptions;
pub use generator::{
    UpdateOutcome,
    generate_block,
    update_target,
};
pub use move_index::{
    Move,
    MoveIndex,
};
pub use selector::{
    MoveSelector,
    SelectionError,
};
pub use splice::{
    SpliceError,
    find_block,
    splice_block,
};
