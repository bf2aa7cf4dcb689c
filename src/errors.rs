use schema::MoveKind;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why a cycle calculation could not produce a numeric answer.
///
/// These are ordinary outcomes, not faults: a presentation layer renders them
/// as "not computable" instead of a misleading zero.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum CycleError {
    /// None of the requested fast moves belong to the Pokemon
    #[error("No matching moves for {pokemon}: {}", .requested.join(", "))]
    NoMatchingMoves {
        pokemon: String,
        requested: Vec<String>,
    },
    /// The resolved fast moves generate no energy, so no charged move is ever reached
    #[error("No energy gain from the selected fast moves of {pokemon}")]
    NoEnergyProgress { pokemon: String },
    /// The charged move is not in the catalog for this Pokemon
    #[error("Charged move not found for {pokemon}: {move_name}")]
    UnknownChargedMove { pokemon: String, move_name: String },
}

/// Errors raised while loading or indexing the move dataset.
///
/// All of these are fatal for the catalog being built; a previously installed
/// catalog stays in place.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured data directory does not exist
    #[error("Move data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),
    /// Reading a dataset file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON dataset could not be parsed into move records
    #[error("Malformed JSON move data in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// A RON dataset could not be parsed into move records
    #[error("Malformed RON move data in {origin}: {source}")]
    Ron {
        origin: String,
        #[source]
        source: ron::error::SpannedError,
    },
    /// The file extension does not name a supported data format
    #[error("Unsupported move data format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A record parsed but violates a catalog requirement
    #[error("Malformed {kind} record #{index}: {reason}")]
    MalformedRecord {
        kind: MoveKind,
        index: usize,
        reason: String,
    },
    /// Two records share the same (pokemon, move) key
    #[error("Duplicate {kind} record for {pokemon}: {move_name}")]
    DuplicateRecord {
        kind: MoveKind,
        pokemon: String,
        move_name: String,
    },
}

/// Errors related to the calculator configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config {}: {source}", .path.display())]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    /// Repetition count outside `1..=MAX_REPETITIONS`
    #[error("Invalid repetition count {0}: expected 1 to {max}", max = crate::config::MAX_REPETITIONS)]
    InvalidRepetitions(usize),
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
