use super::MoveCatalog;
use crate::config::CalculatorConfig;
use crate::errors::{CatalogError, CatalogResult};
use schema::{ChargedMoveRecord, FastMoveRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// On-disk formats a move table can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// A JSON array of records, the format the game data is published in
    Json,
    /// A RON list of records
    Ron,
}

impl DataFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DataFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(DataFormat::Ron),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse a whole move table. `origin` names the source in error messages.
pub fn parse_records<T: DeserializeOwned>(
    content: &str,
    format: DataFormat,
    origin: &str,
) -> CatalogResult<Vec<T>> {
    match format {
        DataFormat::Json => serde_json::from_str(content).map_err(|source| CatalogError::Json {
            origin: origin.to_string(),
            source,
        }),
        DataFormat::Ron => ron::from_str(content).map_err(|source| CatalogError::Ron {
            origin: origin.to_string(),
            source,
        }),
    }
}

/// Read and parse a move table file, choosing the format from its extension
pub fn read_records<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let format = DataFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = parse_records(&content, format, &path.display().to_string())?;
    debug!(path = %path.display(), count = records.len(), "read move table");
    Ok(records)
}

impl MoveCatalog {
    /// Load the catalog described by a calculator configuration
    pub fn load(config: &CalculatorConfig) -> CatalogResult<Self> {
        Self::load_from_dir(
            &config.data_path,
            &config.fast_moves_file,
            &config.charged_moves_file,
        )
    }

    /// Load both move tables from a data directory.
    pub fn load_from_dir(
        data_path: &Path,
        fast_moves_file: &str,
        charged_moves_file: &str,
    ) -> CatalogResult<Self> {
        if !data_path.is_dir() {
            return Err(CatalogError::DataDirNotFound(data_path.to_path_buf()));
        }

        let fast_moves: Vec<FastMoveRecord> = read_records(&data_path.join(fast_moves_file))?;
        let charged_moves: Vec<ChargedMoveRecord> =
            read_records(&data_path.join(charged_moves_file))?;

        let catalog = Self::from_records(fast_moves, charged_moves)?;
        info!(
            path = %data_path.display(),
            pokemon = catalog.pokemon_count(),
            fast_moves = catalog.fast_move_count(),
            charged_moves = catalog.charged_move_count(),
            "loaded move catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog from two JSON arrays held in memory
    pub fn from_json_str(fast_moves: &str, charged_moves: &str) -> CatalogResult<Self> {
        Self::from_records(
            parse_records(fast_moves, DataFormat::Json, "fast moves")?,
            parse_records(charged_moves, DataFormat::Json, "charged moves")?,
        )
    }

    /// Build a catalog from two RON lists held in memory
    pub fn from_ron_str(fast_moves: &str, charged_moves: &str) -> CatalogResult<Self> {
        Self::from_records(
            parse_records(fast_moves, DataFormat::Ron, "fast moves")?,
            parse_records(charged_moves, DataFormat::Ron, "charged moves")?,
        )
    }
}
