//! Startup data for a `RoadNetwork`.
//!
//! A seed uses the snapshot layout, `{name: {connections: [name...]}}`, with
//! `congestion` optional. Every name is registered before any connection is
//! made, so connection lists may refer forward.

use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::models::{NetworkSnapshot, RoadNetwork};

/// Built-in road map used when no seed file is configured
const DEFAULT_ROADS: &str = include_str!("../data/roads.json");

pub type RoadMap = NetworkSnapshot;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a road map from JSON
///
/// # Errors
///
/// Returns `SeedError::Parse` if the JSON does not match the seed layout
pub fn parse_road_map(json: &str) -> Result<RoadMap, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a road map file
///
/// # Errors
///
/// Returns `SeedError::Io` if the file cannot be read and
/// `SeedError::Parse` if its contents are not a valid seed
pub fn load_road_map(path: &Path) -> Result<RoadMap, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_road_map(&json)
}

#[must_use]
pub fn default_road_map() -> RoadMap {
    match parse_road_map(DEFAULT_ROADS) {
        Ok(map) => map,
        Err(e) => {
            log::error!("Built-in road map is invalid: {e}");
            RoadMap::new()
        }
    }
}

/// Network built from the built-in road map
#[must_use]
pub fn default_network() -> RoadNetwork {
    RoadNetwork::from_snapshot(&default_road_map())
}
