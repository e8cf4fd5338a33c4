//! Extraction of near-Earth objects from the CSV source.

use std::path::Path;

use csv::ReaderBuilder;
use neo_model::NearEarthObject;
use tracing::info;

use crate::error::{IngestError, Result};

/// Read near-Earth object records from a CSV file.
///
/// The file must carry the columns `pdes`, `name`, `pha`, and `diameter`;
/// every other column is ignored. Records are returned in source row order.
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let column = |name: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|header| header.trim_matches('\u{feff}').trim() == name)
            .ok_or(IngestError::MissingColumn {
                column: name,
                path: path.to_path_buf(),
            })
    };
    let pdes = column("pdes")?;
    let name = column("name")?;
    let pha = column("pha")?;
    let diameter = column("diameter")?;

    let mut neos = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let neo = NearEarthObject::from_fields(field(pdes), field(name), field(pha), field(diameter))
            .map_err(|source| IngestError::Record {
                // 1-based, counting the header line
                row: index + 2,
                path: path.to_path_buf(),
                source,
            })?;
        neos.push(neo);
    }
    info!(count = neos.len(), path = %path.display(), "loaded near-Earth objects");
    Ok(neos)
}
