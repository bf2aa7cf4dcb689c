use crate::catalog::MoveCatalog;
use schema::{ChargedMoveRecord, Energy, FastMoveRecord};
use std::fs;
use std::path::PathBuf;

/// A builder for small in-memory catalogs.
///
/// # Example
/// ```ignore
/// let catalog = TestCatalogBuilder::new()
///     .with_fast("Medicham", "Counter", 7)
///     .with_charged("Medicham", "Ice Punch", 40)
///     .build();
/// ```
#[derive(Default)]
pub struct TestCatalogBuilder {
    fast_moves: Vec<FastMoveRecord>,
    charged_moves: Vec<ChargedMoveRecord>,
}

impl TestCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fast move record for a Pokemon.
    pub fn with_fast(mut self, pokemon: &str, move_name: &str, energy_gain: Energy) -> Self {
        self.fast_moves
            .push(FastMoveRecord::new(pokemon, move_name, energy_gain));
        self
    }

    /// Adds a charged move record for a Pokemon.
    pub fn with_charged(mut self, pokemon: &str, move_name: &str, energy_cost: Energy) -> Self {
        self.charged_moves
            .push(ChargedMoveRecord::new(pokemon, move_name, energy_cost));
        self
    }

    /// Builds the catalog, panicking on validation errors.
    pub fn build(self) -> MoveCatalog {
        match MoveCatalog::from_records(self.fast_moves, self.charged_moves) {
            Ok(catalog) => catalog,
            Err(err) => panic!("Failed to build test catalog: {}", err),
        }
    }
}

/// The sample dataset shipped in `data/`
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn fixture_catalog() -> MoveCatalog {
    MoveCatalog::load_from_dir(&data_dir(), "fast_moves.json", "charged_moves.json")
        .expect("sample dataset should load")
}

/// A fresh, empty directory under the system temp dir for one test
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("movedex-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}
