//! HTTP Protocol
//!
//! Endpoint paths and the JSON bodies the service sends back. Request bodies
//! are read as raw JSON and checked in [`super::validation`] so that every
//! problem can be reported in one response.

use crate::error::ValidationError;
use crate::storage::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- API Endpoints ---

/// Dashboard page.
pub const ENDPOINT_INDEX: &str = "/";
/// The most recent record, with its UID inlined.
pub const ENDPOINT_LAST_DETECTION: &str = "/api/last_detection_data";
/// Every stored record, keyed by UID.
pub const ENDPOINT_DETECTION_DATA: &str = "/api/detection_data";
/// Merge-write of `curvature_angle`.
pub const ENDPOINT_STORE_CURVATURE: &str = "/api/store/curvature";
/// Merge-write of `front_vehicle_distance`.
pub const ENDPOINT_STORE_DISTANCE: &str = "/api/store/distance";

// --- Messages ---

pub const MSG_CURVATURE_STORED: &str = "Curvature angle stored successfully";
pub const MSG_DISTANCE_STORED: &str = "Distance stored successfully";
pub const MSG_NO_DATA: &str = "No data found in detection";
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

// --- Data Transfer Objects ---

/// Reply to `POST /api/store/curvature`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurvatureStoredResponse {
    pub message: String,
    pub uid: String,
    pub curvature_angle: f64,
    pub timestamp: f64,
}

/// Reply to `POST /api/store/distance`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceStoredResponse {
    pub message: String,
    pub uid: String,
    pub front_vehicle_distance: f64,
    pub timestamp: f64,
}

/// Reply to `GET /api/last_detection_data`: the record's fields plus its UID.
#[derive(Debug, Serialize, Deserialize)]
pub struct LastDetectionResponse {
    pub uid: String,
    #[serde(flatten)]
    pub record: Record,
}

/// Reply to `GET /api/detection_data`.
pub type DetectionDataResponse = BTreeMap<String, Record>;

/// Informational reply, used for the empty-store 404.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every 400 and 500 response.
///
/// Field lists are only present on validation failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_fields: Vec<String>,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: MSG_INTERNAL_ERROR.to_string(),
            missing_fields: Vec::new(),
            invalid_fields: Vec::new(),
        }
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        Self {
            error: err.to_string(),
            missing_fields: err.missing,
            invalid_fields: err.invalid,
        }
    }
}
