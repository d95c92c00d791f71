//! Error types for the tilepath program

use std::path::PathBuf;

use thiserror::Error;
use tilepath_search::SearchError;
use tilepath_terrain::TerrainError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}\n\nusage: tilepath <map-file> [--config <file.toml>] [--from x,y --to x,y]")]
    Usage(String),

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("map error: {0}")]
    Terrain(#[from] TerrainError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, CliError>;
