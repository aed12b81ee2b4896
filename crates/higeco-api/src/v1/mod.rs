// Higeco GET API v1 client modules
//
// Hand-written client for the portal's `api/v1/` endpoints. Covers the
// plant -> device -> log -> item resource hierarchy plus the getLogData /
// getLastValue data endpoints, with bearer-token authentication.

pub mod auth;
pub mod client;
pub mod data;
pub mod devices;
pub mod items;
pub mod logs;
pub mod models;
pub mod plants;
pub mod snapshot;

pub use auth::Credentials;
pub use client::{ClientConfig, HigecoClient};
