use serde::{Deserialize, Serialize};
use strum::Display;

/// Elemental type of a move as it appears in the game data.
///
/// The dataset spells types in lowercase (`"fighting"`); `Display` gives the
/// capitalized name used when listing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

/// Which of the two move tables a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MoveKind {
    #[strum(to_string = "fast move")]
    Fast,
    #[strum(to_string = "charged move")]
    Charged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parses_lowercase_and_displays_capitalized() {
        let parsed: PokemonType = serde_json::from_str("\"fairy\"").unwrap();
        assert_eq!(parsed, PokemonType::Fairy);
        assert_eq!(parsed.to_string(), "Fairy");
    }

    #[test]
    fn test_move_kind_display() {
        assert_eq!(MoveKind::Fast.to_string(), "fast move");
        assert_eq!(MoveKind::Charged.to_string(), "charged move");
    }
}
