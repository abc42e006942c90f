//! Road Detection Store Library
//!
//! Records sensor-derived measurements (road curvature angle and distance to
//! the vehicle ahead) per caller-supplied UID, and serves them back over HTTP.
//! The binary (`main.rs`) only wires configuration, logging and the listener
//! around these modules.
//!
//! ## Modules
//! - **`storage`**: the `RecordStore` contract with merge-writes and "most recent"
//!   lookups, an in-memory sharded implementation and a timeout decorator.
//! - **`api`**: stateless HTTP handlers that validate bodies, call exactly one store
//!   operation and map the outcome to a JSON response.
//! - **`config`**: listener, timeout and ordering settings from flags or environment.
//! - **`error`**: the validation / not-found / store-unavailable taxonomy.

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
