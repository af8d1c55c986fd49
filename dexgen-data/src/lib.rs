extern crate alloc;

mod datastore;
mod mons;
mod moves;

pub use datastore::*;
pub use mons::*;
pub use moves::*;
