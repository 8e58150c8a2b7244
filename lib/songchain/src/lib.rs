pub mod client;
pub mod config;
pub mod error;

pub use client::{BackendClient, BackendClientBuilder};
pub use config::client;
pub use error::{BackendError, Result};
