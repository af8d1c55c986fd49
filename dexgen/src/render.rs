use dexgen_data::{
    SpeciesData,
    Type,
};

use crate::Move;

/// Returns the script constant for a category label.
///
/// The script has no constant for Fairy, so Fairy and any unknown label render as Normal. Labels
/// must match exactly, the same way move categories are looked up.
pub fn type_constant(label: &str) -> &'static str {
    match Type::from_label(label) {
        Type::Normal | Type::Fairy => "TYPES.NORMAL",
        Type::Fighting => "TYPES.FIGHTING",
        Type::Flying => "TYPES.FLYING",
        Type::Poison => "TYPES.POISON",
        Type::Ground => "TYPES.GROUND",
        Type::Rock => "TYPES.ROCK",
        Type::Bug => "TYPES.BUG",
        Type::Ghost => "TYPES.GHOST",
        Type::Steel => "TYPES.STEEL",
        Type::Fire => "TYPES.FIRE",
        Type::Water => "TYPES.WATER",
        Type::Grass => "TYPES.GRASS",
        Type::Electric => "TYPES.ELECTRIC",
        Type::Psychic => "TYPES.PSYCHIC",
        Type::Ice => "TYPES.ICE",
        Type::Dragon => "TYPES.DRAGON",
        Type::Dark => "TYPES.DARK",
    }
}

/// Renders a move constructor call.
pub fn render_move(m: &Move) -> String {
    format!(
        "Move.new(\"{}\", {}, {}, {})",
        m.name,
        m.power,
        m.accuracy,
        type_constant(&m.category)
    )
}

/// Renders one entry of the species dictionary, keyed by dex number.
///
/// Names are written verbatim between quotes.
pub fn render_species(species: &SpeciesData, moves: &[Move]) -> String {
    let moves_literal = moves
        .iter()
        .map(|m| format!("\n\t\t\t{},", render_move(m)))
        .collect::<String>();

    format!(
        "\t{id}: Pokemon.new({id}, \"{name}\", {primary}, {hp}, {attack}, {defense}, {speed}, [{moves_literal}\n\t\t]),",
        id = species.id,
        name = species.name.english,
        primary = type_constant(species.primary_type()),
        hp = species.base.hp,
        attack = species.base.attack,
        defense = species.base.defense,
        speed = species.base.speed,
    )
}

/// Renders the whole dictionary block, opening with `header`.
///
/// Entries keep the given order and each keeps its trailing comma.
pub fn render_block<I, S>(header: &str, entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut block = String::from(header);
    block.push('\n');
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            block.push('\n');
        }
        block.push_str(entry.as_ref());
    }
    block.push_str("\n}");
    block
}
