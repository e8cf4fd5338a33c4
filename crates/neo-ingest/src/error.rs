//! Error types for source-data extraction.

use std::path::PathBuf;

use neo_model::ModelError;
use thiserror::Error;

/// Errors that can occur while extracting entities from source files.
///
/// Extraction is fail-fast: the first bad record aborts the whole load and
/// no partial collection is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read a source file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV container was malformed.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The JSON container was malformed.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required column is absent from the source header.
    #[error("required column `{column}` not found in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    /// A data row is shorter than the field list that describes it.
    #[error("row {row} in {path} is shorter than the field list")]
    ShortRow { row: usize, path: PathBuf },

    /// A record failed the model construction contract.
    #[error("record {row} in {path}: {source}")]
    Record {
        row: usize,
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_column_and_path() {
        let err = IngestError::MissingColumn {
            column: "pdes",
            path: PathBuf::from("data/neos.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column `pdes` not found in data/neos.csv"
        );
    }
}
