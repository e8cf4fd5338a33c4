//! Extraction of close approaches from the JSON source.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use neo_model::CloseApproach;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::{IngestError, Result};

/// Top-level shape of the close-approach source document: an ordered list of
/// column names and a list of value rows, one per approach.
#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Read close-approach records from a JSON file.
///
/// The logical fields `des`, `cd`, `dist`, and `v_rel` are resolved by
/// position in the document's `fields` list; each data row is zipped against
/// that list. Records are returned in source order.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document: CadDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let position = |name: &'static str| -> Result<usize> {
        document
            .fields
            .iter()
            .position(|field| field == name)
            .ok_or(IngestError::MissingColumn {
                column: name,
                path: path.to_path_buf(),
            })
    };
    let des = position("des")?;
    let cd = position("cd")?;
    let dist = position("dist")?;
    let v_rel = position("v_rel")?;
    let width = des.max(cd).max(dist).max(v_rel);

    let mut approaches = Vec::with_capacity(document.data.len());
    for (row, values) in document.data.iter().enumerate() {
        if values.len() <= width {
            return Err(IngestError::ShortRow {
                row,
                path: path.to_path_buf(),
            });
        }
        let approach = CloseApproach::from_fields(
            &scalar_text(&values[des]),
            &scalar_text(&values[cd]),
            &scalar_text(&values[dist]),
            &scalar_text(&values[v_rel]),
        )
        .map_err(|source| IngestError::Record {
            row,
            path: path.to_path_buf(),
            source,
        })?;
        approaches.push(approach);
    }
    info!(count = approaches.len(), path = %path.display(), "loaded close approaches");
    Ok(approaches)
}

/// Text form of a scalar JSON value. Null collapses to the empty string so
/// the model's missing-field normalization applies uniformly.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}
