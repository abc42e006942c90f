//! HTTP API Module
//!
//! Thin translation layer between HTTP and the record store. Handlers hold no
//! state of their own: the single store built at startup is handed to them
//! through an axum `Extension`.
//!
//! ## Submodules
//! - **`protocol`**: endpoint paths and response bodies.
//! - **`validation`**: batch checking of request bodies.
//! - **`handlers`**: request handlers and the error-to-response mapping.

pub mod handlers;
pub mod protocol;
pub mod validation;


use crate::storage::SharedStore;
use axum::routing::{get, post};
use axum::{Extension, Router};
use handlers::*;
use protocol::*;

/// Builds the service router around `store`.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(ENDPOINT_INDEX, get(handle_index))
        .route(ENDPOINT_LAST_DETECTION, get(handle_last_detection))
        .route(ENDPOINT_DETECTION_DATA, get(handle_detection_data))
        .route(ENDPOINT_STORE_CURVATURE, post(handle_store_curvature))
        .route(ENDPOINT_STORE_DISTANCE, post(handle_store_distance))
        .layer(Extension(store))
}
