use dexgen_data::{
    BaseStats,
    MoveData,
    SpeciesData,
    SpeciesName,
};

/// A species with the given categories and default base stats.
pub fn species(id: u32, name: &str, types: &[&str]) -> SpeciesData {
    SpeciesData {
        id,
        name: SpeciesName {
            english: name.to_owned(),
            ..Default::default()
        },
        types: types.iter().map(|label| (*label).to_owned()).collect(),
        base: BaseStats::default(),
    }
}

/// `count` species numbered from 1, each named after its number and cycling through `types`.
pub fn numbered_species(count: u32, types: &[&str]) -> Vec<SpeciesData> {
    (1..=count)
        .map(|id| {
            let label = types[(id as usize - 1) % types.len()];
            species(id, &format!("Species {id}"), &[label])
        })
        .collect()
}

/// A valid move.
pub fn move_data(name: &str, move_type: &str, power: u32, accuracy: u32) -> MoveData {
    MoveData {
        ename: Some(name.to_owned()),
        move_type: Some(move_type.to_owned()),
        power: Some(power),
        accuracy: Some(accuracy),
        ..Default::default()
    }
}

/// A move with no power, which never passes validation.
pub fn invalid_move(name: &str, move_type: &str) -> MoveData {
    MoveData {
        ename: Some(name.to_owned()),
        move_type: Some(move_type.to_owned()),
        power: None,
        accuracy: Some(100),
        ..Default::default()
    }
}

/// `count` valid moves of one category, named `"<type> <n>"`.
pub fn moves_of_type(move_type: &str, count: u32) -> Vec<MoveData> {
    (1..=count)
        .map(|n| move_data(&format!("{move_type} {n}"), move_type, 10 * n, 100))
        .collect()
}
