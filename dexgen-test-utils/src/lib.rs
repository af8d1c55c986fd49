mod data_store;
mod error_assert;
mod fixtures;
mod rng;
mod setup;

pub use data_store::TestDataStore;
pub use error_assert::assert_error_message_contains;
pub use fixtures::{
    invalid_move,
    move_data,
    moves_of_type,
    numbered_species,
    species,
};
pub use rng::{
    ForcedDrawPrng,
    as_forced_draw_prng,
};
pub use setup::setup_test_environment;
