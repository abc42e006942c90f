use super::protocol::*;
use super::validation::{parse_body, parse_measurement};
use crate::error::Error;
use crate::storage::{Field, Record, SharedStore};

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Json};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(err))).into_response()
            }
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: MSG_NO_DATA.to_string(),
                }),
            )
                .into_response(),
            // Detail stays in the server log.
            Error::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response(),
        }
    }
}

pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("dashboard.html"))
}

pub async fn handle_last_detection(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<LastDetectionResponse>, Error> {
    match store.get_most_recent().await {
        Ok(Some((uid, record))) => {
            tracing::info!("Retrieved last detection data for UID: {}", uid);
            Ok(Json(LastDetectionResponse { uid, record }))
        }
        Ok(None) => {
            tracing::warn!("No detection data stored yet");
            Err(Error::NotFound)
        }
        Err(e) => {
            tracing::error!("Error fetching last detection data: {}", e);
            Err(e)
        }
    }
}

pub async fn handle_detection_data(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<DetectionDataResponse>, Error> {
    match store.get_all().await {
        Ok(records) if records.is_empty() => {
            tracing::warn!("No detection data stored yet");
            Err(Error::NotFound)
        }
        Ok(records) => {
            tracing::info!("Retrieved detection data for {} UIDs", records.len());
            Ok(Json(records))
        }
        Err(e) => {
            tracing::error!("Error fetching detection data: {}", e);
            Err(e)
        }
    }
}

pub async fn handle_store_curvature(
    Extension(store): Extension<SharedStore>,
    body: Bytes,
) -> Result<Json<CurvatureStoredResponse>, Error> {
    let (uid, record) = store_measurement(&store, body, "angle", Field::CurvatureAngle).await?;
    let curvature_angle = record.curvature_angle.unwrap_or_default();
    tracing::info!("Stored curvature angle: {} for UID: {}", curvature_angle, uid);

    Ok(Json(CurvatureStoredResponse {
        message: MSG_CURVATURE_STORED.to_string(),
        uid,
        curvature_angle,
        timestamp: record.timestamp,
    }))
}

pub async fn handle_store_distance(
    Extension(store): Extension<SharedStore>,
    body: Bytes,
) -> Result<Json<DistanceStoredResponse>, Error> {
    let (uid, record) =
        store_measurement(&store, body, "distance", Field::FrontVehicleDistance).await?;
    let front_vehicle_distance = record.front_vehicle_distance.unwrap_or_default();
    tracing::info!(
        "Stored front vehicle distance: {} for UID: {}",
        front_vehicle_distance,
        uid
    );

    Ok(Json(DistanceStoredResponse {
        message: MSG_DISTANCE_STORED.to_string(),
        uid,
        front_vehicle_distance,
        timestamp: record.timestamp,
    }))
}

/// Validates a measurement body and merge-writes it into `field`.
async fn store_measurement(
    store: &SharedStore,
    body: Bytes,
    value_field: &str,
    field: Field,
) -> Result<(String, Record), Error> {
    let req = parse_body(&body)
        .and_then(|value| parse_measurement(value.as_ref(), value_field))
        .map_err(|err| {
            tracing::warn!("Rejected {} write: {}", field, err);
            Error::Validation(err)
        })?;

    match store.upsert_field(&req.uid, field, req.value).await {
        Ok(record) => Ok((req.uid, record)),
        Err(e) => {
            if e.is_store_unavailable() {
                tracing::error!("Error storing {} for UID {}: {}", field, req.uid, e);
            } else {
                tracing::warn!("Store rejected {} for UID {}: {}", field, req.uid, e);
            }
            Err(e)
        }
    }
}
