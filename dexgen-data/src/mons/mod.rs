mod species_data;
mod r#type;

pub use species_data::{
    BaseStats,
    SpeciesData,
    SpeciesName,
};
pub use r#type::Type;
