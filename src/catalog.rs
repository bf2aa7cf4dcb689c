use crate::config::CalculatorConfig;
use crate::errors::{CatalogError, CatalogResult};
use schema::{ChargedMoveRecord, Energy, FastMoveRecord, MoveKind};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tracing::{debug, info};

pub mod loader;

pub use loader::DataFormat;

// Global catalog snapshot - loaded once at startup, swapped whole on reload
static CATALOG: LazyLock<RwLock<Arc<MoveCatalog>>> =
    LazyLock::new(|| RwLock::new(Arc::new(MoveCatalog::default())));

/// Load the dataset named by `config` and install it as the current catalog.
///
/// On failure the previously installed catalog is left untouched.
pub fn initialize_catalog(config: &CalculatorConfig) -> CatalogResult<Arc<MoveCatalog>> {
    let catalog = MoveCatalog::load(config)?;
    Ok(install_catalog(catalog))
}

/// Install a fully built catalog as the process-wide snapshot.
///
/// Callers holding an earlier snapshot keep seeing it unchanged; only
/// subsequent `current_catalog` calls observe the new one.
pub fn install_catalog(catalog: MoveCatalog) -> Arc<MoveCatalog> {
    let snapshot = Arc::new(catalog);
    let mut global = CATALOG.write().unwrap_or_else(PoisonError::into_inner);
    *global = Arc::clone(&snapshot);
    info!(
        pokemon = snapshot.pokemon_count(),
        fast_moves = snapshot.fast_move_count(),
        charged_moves = snapshot.charged_move_count(),
        "installed move catalog"
    );
    snapshot
}

/// Get the current process-wide catalog snapshot
pub fn current_catalog() -> Arc<MoveCatalog> {
    let global = CATALOG.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&global)
}

/// Move lists of one Pokemon, as indices into the catalog tables.
#[derive(Debug, Clone, Default)]
struct PokemonMoves {
    fast: Vec<usize>,
    charged: Vec<usize>,
}

/// Read-only index of fast and charged move records keyed by (pokemon, move).
///
/// Records keep the order of the dataset they were loaded from, and every
/// per-Pokemon query goes through a prebuilt index rather than scanning the
/// full tables.
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    fast_moves: Vec<FastMoveRecord>,
    charged_moves: Vec<ChargedMoveRecord>,
    by_pokemon: HashMap<String, PokemonMoves>,
    pokemon_order: Vec<String>,
}

impl MoveCatalog {
    /// Build a catalog from already parsed records.
    ///
    /// Fails if a record has an empty Pokemon or move name, or if two records
    /// of the same kind share a (pokemon, move) pair.
    pub fn from_records(
        fast_moves: Vec<FastMoveRecord>,
        charged_moves: Vec<ChargedMoveRecord>,
    ) -> CatalogResult<Self> {
        let mut catalog = MoveCatalog::default();

        for (index, record) in fast_moves.iter().enumerate() {
            check_names(MoveKind::Fast, index, &record.pokemon, &record.move_name)?;
            let entry = catalog.entry_for(&record.pokemon);
            if entry
                .fast
                .iter()
                .any(|&i| fast_moves[i].move_name == record.move_name)
            {
                return Err(CatalogError::DuplicateRecord {
                    kind: MoveKind::Fast,
                    pokemon: record.pokemon.clone(),
                    move_name: record.move_name.clone(),
                });
            }
            entry.fast.push(index);
        }

        for (index, record) in charged_moves.iter().enumerate() {
            check_names(MoveKind::Charged, index, &record.pokemon, &record.move_name)?;
            let entry = catalog.entry_for(&record.pokemon);
            if entry
                .charged
                .iter()
                .any(|&i| charged_moves[i].move_name == record.move_name)
            {
                return Err(CatalogError::DuplicateRecord {
                    kind: MoveKind::Charged,
                    pokemon: record.pokemon.clone(),
                    move_name: record.move_name.clone(),
                });
            }
            entry.charged.push(index);
        }

        catalog.fast_moves = fast_moves;
        catalog.charged_moves = charged_moves;

        debug!(
            pokemon = catalog.pokemon_count(),
            fast_moves = catalog.fast_moves.len(),
            charged_moves = catalog.charged_moves.len(),
            "indexed move records"
        );
        Ok(catalog)
    }

    fn entry_for(&mut self, pokemon: &str) -> &mut PokemonMoves {
        if !self.by_pokemon.contains_key(pokemon) {
            self.pokemon_order.push(pokemon.to_string());
        }
        self.by_pokemon.entry(pokemon.to_string()).or_default()
    }

    /// Fast moves of `pokemon` whose name is in `move_names`, in dataset order.
    ///
    /// An empty result means nothing matched; it is not an error here.
    pub fn fast_moves_for<S: AsRef<str>>(
        &self,
        pokemon: &str,
        move_names: &[S],
    ) -> Vec<&FastMoveRecord> {
        self.fast_moves_of(pokemon)
            .filter(|record| {
                move_names
                    .iter()
                    .any(|name| name.as_ref() == record.move_name)
            })
            .collect()
    }

    /// Energy cost of a charged move, or `None` if the Pokemon has no such move.
    ///
    /// A move that legitimately costs nothing returns `Some(0)`.
    pub fn charged_move_energy(&self, pokemon: &str, move_name: &str) -> Option<Energy> {
        self.charged_move(pokemon, move_name)
            .map(|record| record.energy_cost)
    }

    pub fn charged_move(&self, pokemon: &str, move_name: &str) -> Option<&ChargedMoveRecord> {
        self.charged_moves_of(pokemon)
            .find(|record| record.move_name == move_name)
    }

    /// All fast moves of a Pokemon in dataset order
    pub fn fast_moves_of<'a>(&'a self, pokemon: &str) -> impl Iterator<Item = &'a FastMoveRecord> + 'a {
        let indices = self
            .by_pokemon
            .get(pokemon)
            .map(|moves| moves.fast.as_slice())
            .unwrap_or_default();
        indices.iter().map(move |&i| &self.fast_moves[i])
    }

    /// All charged moves of a Pokemon in dataset order
    pub fn charged_moves_of<'a>(&'a self, pokemon: &str) -> impl Iterator<Item = &'a ChargedMoveRecord> + 'a {
        let indices = self
            .by_pokemon
            .get(pokemon)
            .map(|moves| moves.charged.as_slice())
            .unwrap_or_default();
        indices.iter().map(move |&i| &self.charged_moves[i])
    }

    /// Species names in the order they first appear in the dataset
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_order.iter().map(String::as_str)
    }

    /// Match a user-typed name to the catalog's spelling, ignoring case.
    pub fn resolve_pokemon(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        if let Some((canonical, _)) = self.by_pokemon.get_key_value(name) {
            return Some(canonical.as_str());
        }
        let wanted = name.to_lowercase();
        self.pokemon_names()
            .find(|candidate| candidate.to_lowercase() == wanted)
    }

    pub fn contains_pokemon(&self, pokemon: &str) -> bool {
        self.by_pokemon.contains_key(pokemon)
    }

    pub fn pokemon_count(&self) -> usize {
        self.pokemon_order.len()
    }

    pub fn fast_move_count(&self) -> usize {
        self.fast_moves.len()
    }

    pub fn charged_move_count(&self) -> usize {
        self.charged_moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fast_moves.is_empty() && self.charged_moves.is_empty()
    }
}

fn check_names(kind: MoveKind, index: usize, pokemon: &str, move_name: &str) -> CatalogResult<()> {
    let reason = if pokemon.trim().is_empty() {
        "missing pokemon name"
    } else if move_name.trim().is_empty() {
        "missing move name"
    } else {
        return Ok(());
    };
    Err(CatalogError::MalformedRecord {
        kind,
        index,
        reason: reason.to_string(),
    })
}
