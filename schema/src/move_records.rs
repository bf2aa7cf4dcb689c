use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy amounts are whole numbers in the game data.
pub type Energy = u32;

/// A per-turn statistic. The source tables mix numbers with placeholder text
/// (e.g. `"-"`) for moves where the ratio is meaningless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerTurnValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for PerTurnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerTurnValue::Number(value) => write!(f, "{}", value),
            PerTurnValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// One fast move as learned by one Pokemon.
///
/// Only `pokemon`, `move` and `energy_gain` are required; everything else is
/// descriptive payload carried along for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastMoveRecord {
    pub pokemon: String,
    #[serde(rename = "move")]
    pub move_name: String,
    pub energy_gain: Energy,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub move_type: Option<PokemonType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_per_turn: Option<PerTurnValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_per_turn: Option<PerTurnValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

/// One charged move as learned by one Pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargedMoveRecord {
    pub pokemon: String,
    #[serde(rename = "move")]
    pub move_name: String,
    #[serde(rename = "energy")]
    pub energy_cost: Energy,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub move_type: Option<PokemonType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

impl FastMoveRecord {
    /// Minimal record with no descriptive payload.
    pub fn new(pokemon: impl Into<String>, move_name: impl Into<String>, energy_gain: Energy) -> Self {
        Self {
            pokemon: pokemon.into(),
            move_name: move_name.into(),
            energy_gain,
            move_type: None,
            damage: None,
            turns: None,
            damage_per_turn: None,
            energy_per_turn: None,
            archetype: None,
        }
    }
}

impl ChargedMoveRecord {
    /// Minimal record with no descriptive payload.
    pub fn new(pokemon: impl Into<String>, move_name: impl Into<String>, energy_cost: Energy) -> Self {
        Self {
            pokemon: pokemon.into(),
            move_name: move_name.into(),
            energy_cost,
            move_type: None,
            damage: None,
            effect: None,
            archetype: None,
        }
    }
}

impl fmt::Display for FastMoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.move_name)?;
        if let Some(move_type) = self.move_type {
            write!(f, " [{}]", move_type)?;
        }
        write!(f, ", Energy Gain: {}", self.energy_gain)
    }
}

impl fmt::Display for ChargedMoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.move_name)?;
        if let Some(move_type) = self.move_type {
            write!(f, " [{}]", move_type)?;
        }
        write!(f, ", Energy Needed: {}", self.energy_cost)
    }
}
