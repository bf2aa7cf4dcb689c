// In: src/lib.rs

//! Pokemon Movedex
//!
//! Move data for a static Pokemon roster, and the energy-cycle calculator
//! built on it: how many fast-move uses it takes to fire a charged move again
//! and again, with leftover energy carried between cycles.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod config;
pub mod cycles;
pub mod errors;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{ChargedMoveRecord, Energy, FastMoveRecord, MoveKind, PerTurnValue, PokemonType};

// --- From this crate's modules (`src/`) ---

// Move catalog and the process-wide snapshot store.
pub use catalog::{current_catalog, initialize_catalog, install_catalog, DataFormat, MoveCatalog};

// Cycle calculator.
pub use cycles::{
    compute_cycle_counts, cycles_for_charged_move, simulate_cycles, CycleCell, CycleOutcome,
    CycleResult, CycleRow, CycleTable,
};

pub use config::{CalculatorConfig, DEFAULT_REPETITIONS, MAX_REPETITIONS};

// Crate-specific error and result types.
pub use errors::{CatalogError, CatalogResult, ConfigError, ConfigResult, CycleError};
