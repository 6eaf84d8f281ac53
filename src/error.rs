use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path:?} does not contain a JSON array of records")]
    NotAnArray { path: PathBuf },

    #[error("record {index}: unknown season {season}")]
    UnknownSeason { index: usize, season: String },

    #[error("record {index}: season_year must be a string or a number")]
    UnsupportedYear { index: usize },

    #[error("record {index}: launch date for {year} {season} is out of range")]
    DateOutOfRange {
        index: usize,
        year: String,
        season: String,
    },
}

pub type Result<T> = std::result::Result<T, EnrichError>;
