use std::fmt;

use serde::Serialize;

use crate::error::ModelError;
use crate::ids::ApproachId;

/// A near-Earth object (NEO).
///
/// An NEO carries its primary designation (required, unique), IAU name
/// (optional), diameter in kilometers (NaN when unknown), and whether it is
/// flagged as potentially hazardous. It also keeps an ordered list of arena
/// keys for its linked close approaches, empty at construction and populated
/// only by the database linker.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Build an NEO from raw source fields.
    ///
    /// Normalization on construction: an empty `name` becomes the unset
    /// sentinel, an empty `diameter` becomes NaN, and `hazardous` is true
    /// only for the literal flag `"Y"`.
    pub fn from_fields(
        designation: &str,
        name: &str,
        diameter: &str,
        hazardous: &str,
    ) -> Result<Self, ModelError> {
        if designation.is_empty() {
            return Err(ModelError::MissingField {
                field: "designation",
            });
        }
        let diameter = if diameter.is_empty() {
            f64::NAN
        } else {
            diameter
                .parse::<f64>()
                .map_err(|_| ModelError::MalformedNumber {
                    field: "diameter",
                    value: diameter.to_string(),
                })?
        };
        Ok(Self {
            designation: designation.to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
            diameter,
            hazardous: hazardous == "Y",
            approaches: Vec::new(),
        })
    }

    /// The primary designation. Immutable once constructed.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// The IAU name, or `None` when the object is unnamed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers; NaN when unknown.
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    /// Arena keys of the linked close approaches, in link order.
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// Record a linked close approach.
    ///
    /// Called once per approach by the database linker; approaches accumulate
    /// in link order and are never removed.
    pub fn record_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }

    /// Human-readable full name: `"<designation> (<name>)"` when named,
    /// the bare designation otherwise.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({name})", self.designation),
            None => self.designation.clone(),
        }
    }

    /// Flatten into the external serialization contract.
    pub fn serialize(&self) -> NeoRecord {
        NeoRecord {
            designation: self.designation.clone(),
            name: self.name.clone().unwrap_or_default(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has a diameter of {:.3} km and is {}potentially hazardous.",
            self.fullname(),
            self.diameter,
            if self.hazardous { "" } else { "not " }
        )
    }
}

/// Flat serialized form of a [`NearEarthObject`].
///
/// Field names follow the external output contract: `name` renders the unset
/// sentinel as an empty string, `diameter_km` keeps the NaN sentinel numeric
/// (the JSON text layer encodes non-finite values as `null`), and the
/// approach list is never included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: String,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}
