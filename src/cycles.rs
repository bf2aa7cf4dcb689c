//! Energy bookkeeping between a fast-move set and one charged move.
//!
//! Each cycle banks fast-move energy until the charged move is affordable,
//! fires it, and carries whatever is left into the next cycle. All arithmetic
//! is exact integer math: an energy requirement that is an exact multiple of
//! the per-use gain never costs an extra use.

use crate::catalog::MoveCatalog;
use crate::errors::CycleError;
use schema::Energy;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU64;
use tracing::{debug, trace};

pub mod table;

pub use table::{CycleCell, CycleRow, CycleTable};

/// Either a computed cycle sequence or the reason it could not be computed
pub type CycleOutcome = Result<CycleResult, CycleError>;

/// Fast-move uses needed per cycle, plus the energy left after the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleResult {
    pub moves_needed: Vec<u32>,
    pub remainder: u64,
}

impl CycleResult {
    /// Fast-move uses across every simulated cycle
    pub fn total_uses(&self) -> u64 {
        self.moves_needed.iter().map(|&uses| u64::from(uses)).sum()
    }

    pub fn repetitions(&self) -> usize {
        self.moves_needed.len()
    }
}

impl fmt::Display for CycleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, uses) in self.moves_needed.iter().enumerate() {
            if i > 0 {
                write!(f, "  |  ")?;
            }
            write!(f, "{}", uses)?;
        }
        Ok(())
    }
}

/// Run `repetitions` charge-then-fire cycles at a fixed energy rate.
///
/// Every cycle uses the fewest fast moves `n` with
/// `banked + n * energy_per_use >= charged_move_energy`.
pub fn simulate_cycles(
    energy_per_use: NonZeroU64,
    charged_move_energy: Energy,
    repetitions: usize,
) -> CycleResult {
    let rate = energy_per_use.get();
    let cost = u64::from(charged_move_energy);
    let mut remainder: u64 = 0;
    let mut moves_needed = Vec::with_capacity(repetitions);

    for cycle in 0..repetitions {
        let shortfall = cost.saturating_sub(remainder);
        let uses = shortfall.div_ceil(rate);
        remainder = remainder + uses * rate - cost;
        trace!(cycle, shortfall, uses, remainder, "simulated cycle");
        // uses <= shortfall <= charged_move_energy, so it fits the energy width
        moves_needed.push(uses as u32);
    }

    CycleResult {
        moves_needed,
        remainder,
    }
}

/// Fast-move uses needed to fire a charged move `repetitions` times in a row.
///
/// The energy gains of every catalog fast move of `pokemon` named in
/// `fast_move_names` are summed into one per-use rate. Fails with
/// `NoMatchingMoves` when no name resolves and with `NoEnergyProgress` when the
/// resolved moves generate no energy at all.
pub fn compute_cycle_counts<S: AsRef<str>>(
    catalog: &MoveCatalog,
    pokemon: &str,
    fast_move_names: &[S],
    charged_move_energy: Energy,
    repetitions: usize,
) -> CycleOutcome {
    let fast_moves = catalog.fast_moves_for(pokemon, fast_move_names);
    if fast_moves.is_empty() {
        debug!(pokemon, "no fast moves matched");
        return Err(CycleError::NoMatchingMoves {
            pokemon: pokemon.to_string(),
            requested: fast_move_names
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
        });
    }

    let total_energy_per_use: u64 = fast_moves
        .iter()
        .map(|record| u64::from(record.energy_gain))
        .sum();

    let Some(rate) = NonZeroU64::new(total_energy_per_use) else {
        debug!(pokemon, "fast moves generate no energy");
        return Err(CycleError::NoEnergyProgress {
            pokemon: pokemon.to_string(),
        });
    };

    Ok(simulate_cycles(rate, charged_move_energy, repetitions))
}

/// Same as `compute_cycle_counts`, but looks the charged move's cost up by name.
pub fn cycles_for_charged_move<S: AsRef<str>>(
    catalog: &MoveCatalog,
    pokemon: &str,
    fast_move_names: &[S],
    charged_move_name: &str,
    repetitions: usize,
) -> CycleOutcome {
    let energy = catalog
        .charged_move_energy(pokemon, charged_move_name)
        .ok_or_else(|| CycleError::UnknownChargedMove {
            pokemon: pokemon.to_string(),
            move_name: charged_move_name.to_string(),
        })?;
    compute_cycle_counts(catalog, pokemon, fast_move_names, energy, repetitions)
}
