use super::{compute_cycle_counts, CycleOutcome};
use crate::catalog::MoveCatalog;
use crate::errors::CycleError;
use serde::Serialize;
use std::fmt;

/// One (charged move, fast move) pairing of a Pokemon's move table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleCell {
    pub fast_move: String,
    pub outcome: CycleOutcome,
}

/// Every fast-move pairing for one charged move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleRow {
    pub charged_move: String,
    pub energy_cost: u32,
    pub cells: Vec<CycleCell>,
}

/// Fast moves needed for each of a Pokemon's charged moves, per fast move.
///
/// Rows follow the dataset order of the charged moves, columns the dataset
/// order of the fast moves. A Pokemon missing from the catalog gives an empty
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleTable {
    pub pokemon: String,
    pub repetitions: usize,
    pub fast_moves: Vec<String>,
    pub rows: Vec<CycleRow>,
}

impl CycleTable {
    pub fn build(catalog: &MoveCatalog, pokemon: &str, repetitions: usize) -> Self {
        let fast_moves: Vec<String> = catalog
            .fast_moves_of(pokemon)
            .map(|record| record.move_name.clone())
            .collect();

        let rows = catalog
            .charged_moves_of(pokemon)
            .map(|charged| CycleRow {
                charged_move: charged.move_name.clone(),
                energy_cost: charged.energy_cost,
                cells: fast_moves
                    .iter()
                    .map(|fast_move| CycleCell {
                        fast_move: fast_move.clone(),
                        outcome: compute_cycle_counts(
                            catalog,
                            pokemon,
                            std::slice::from_ref(fast_move),
                            charged.energy_cost,
                            repetitions,
                        ),
                    })
                    .collect(),
            })
            .collect();

        CycleTable {
            pokemon: pokemon.to_string(),
            repetitions,
            fast_moves,
            rows,
        }
    }

    /// Look up the outcome for one pairing
    pub fn cell(&self, charged_move: &str, fast_move: &str) -> Option<&CycleOutcome> {
        self.rows
            .iter()
            .find(|row| row.charged_move == charged_move)?
            .cells
            .iter()
            .find(|cell| cell.fast_move == fast_move)
            .map(|cell| &cell.outcome)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.fast_moves.is_empty()
    }
}

fn cell_text(outcome: &CycleOutcome) -> String {
    match outcome {
        Ok(result) => result.to_string(),
        Err(CycleError::NoEnergyProgress { .. }) => "No energy gain".to_string(),
        Err(_) => "No matching moves".to_string(),
    }
}

impl fmt::Display for CycleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec![self.pokemon.clone()];
        header.extend(self.fast_moves.iter().cloned());

        let body: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut line = vec![row.charged_move.clone()];
                line.extend(row.cells.iter().map(|cell| cell_text(&cell.outcome)));
                line
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for line in &body {
            for (width, text) in widths.iter_mut().zip(line) {
                *width = (*width).max(text.chars().count());
            }
        }

        write_row(f, &header, &widths)?;
        for line in &body {
            write_row(f, line, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, line: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = line
        .iter()
        .zip(widths)
        .map(|(text, &width)| format!("{:<width$}", text))
        .collect();
    writeln!(f, "{}", padded.join("   ").trim_end())
}
