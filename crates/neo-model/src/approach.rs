use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::ModelError;
use crate::ids::NeoId;
use crate::neo::NearEarthObject;
use crate::time::{format_calendar_date, parse_calendar_date};

/// A close approach to Earth by an NEO.
///
/// Carries the approach timestamp (UTC), the nominal approach distance in
/// astronomical units, and the relative approach velocity in kilometers per
/// second. The designation of the approaching object is captured at
/// construction time and serves as the join key until the database linker
/// resolves it to an owning [`NearEarthObject`] arena key.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl CloseApproach {
    /// Build a close approach from raw source fields.
    pub fn from_fields(
        designation: &str,
        time: &str,
        distance: &str,
        velocity: &str,
    ) -> Result<Self, ModelError> {
        if designation.is_empty() {
            return Err(ModelError::MissingField {
                field: "designation",
            });
        }
        Ok(Self {
            designation: designation.to_string(),
            time: parse_calendar_date(time)?,
            distance: parse_float("distance", distance)?,
            velocity: parse_float("velocity", velocity)?,
            neo: None,
        })
    }

    /// The captured designation of the approaching object.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Second-less textual form of the approach time.
    pub fn time_str(&self) -> String {
        format_calendar_date(&self.time)
    }

    /// Approach distance in astronomical units.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative velocity in kilometers per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Arena key of the owning NEO, or `None` while unlinked.
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Attach the owning NEO. Called at most once, by the database linker.
    pub fn set_neo(&mut self, id: NeoId) {
        self.neo = Some(id);
    }

    /// Flatten into the external serialization contract.
    ///
    /// Neither the owning-NEO key nor the captured designation appear here;
    /// the JSON writer re-attaches NEO data under a `neo` key itself.
    pub fn serialize(&self) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
        }
    }
}

/// An unlinked approach renders through its captured designation; once
/// linked, display code should prefer [`LinkedApproach`] for the full name.
impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, {} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}

/// Flat serialized form of a [`CloseApproach`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
}

/// A close approach paired with its resolved owning NEO.
///
/// Writers and display code that need NEO attributes accept this view, so a
/// record can only reach them after linking. The references are borrowed
/// from the database arena; the view never owns or outlives either record.
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'a> {
    pub approach: &'a CloseApproach,
    pub neo: &'a NearEarthObject,
}

impl fmt::Display for LinkedApproach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, {} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.neo.fullname(),
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ModelError> {
    value.parse::<f64>().map_err(|_| ModelError::MalformedNumber {
        field,
        value: value.to_string(),
    })
}
