use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The measurements stored for one UID.
///
/// A record only exists after at least one field write, so a record with
/// both measurements unset is never observed. Unset fields are left out of
/// the JSON rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvature_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_vehicle_distance: Option<f64>,
    /// Seconds since the Unix epoch of the last write to any field.
    pub timestamp: f64,
}

impl Record {
    /// Merges one field write into the record and stamps it.
    pub fn apply(&mut self, field: Field, value: f64, timestamp: f64) {
        match field {
            Field::CurvatureAngle => self.curvature_angle = Some(value),
            Field::FrontVehicleDistance => self.front_vehicle_distance = Some(value),
        }
        self.timestamp = timestamp;
    }
}

/// The writable measurement fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CurvatureAngle,
    FrontVehicleDistance,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CurvatureAngle => "curvature_angle",
            Field::FrontVehicleDistance => "front_vehicle_distance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "curvature_angle" => Ok(Field::CurvatureAngle),
            "front_vehicle_distance" => Ok(Field::FrontVehicleDistance),
            other => Err(Error::invalid_field(other)),
        }
    }
}

/// How "most recent" is chosen among stored records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LatestPolicy {
    /// Greatest UID under byte-wise string ordering, so `"9"` beats `"10"`.
    #[default]
    Uid,
    /// Greatest write timestamp; equal timestamps fall back to UID ordering.
    Timestamp,
}

impl LatestPolicy {
    /// Orders two `(uid, record)` entries; the greater one is more recent.
    pub fn compare(&self, a: (&str, &Record), b: (&str, &Record)) -> Ordering {
        match self {
            LatestPolicy::Uid => a.0.as_bytes().cmp(b.0.as_bytes()),
            LatestPolicy::Timestamp => a
                .1
                .timestamp
                .total_cmp(&b.1.timestamp)
                .then_with(|| a.0.as_bytes().cmp(b.0.as_bytes())),
        }
    }
}

/// Current wall-clock time in fractional seconds since the Unix epoch.
pub fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
