// higeco-api: Async Rust client for the Higeco GET monitoring platform API

pub mod error;
pub mod transport;
pub mod v1;

pub use error::Error;
pub use v1::{ClientConfig, Credentials, HigecoClient};
