//! Build-time configuration.
//!
//! The backend base URL is baked in when the wasm bundle is built; there is
//! no runtime override. Set `SONGCHAIN_API_URL` in the build environment to
//! point at a deployed backend.

use std::sync::OnceLock;

use crate::client::{BackendClient, BackendClientBuilder};

/// Backend base URL the bundle was built against.
pub fn api_url() -> &'static str {
    option_env!("SONGCHAIN_API_URL").unwrap_or("http://localhost:8000/api")
}

// This ensures a single client (and its connection pool) is shared by every
// caller in the process.
pub fn client() -> &'static BackendClient {
    static CLIENT: OnceLock<BackendClient> = OnceLock::new();
    CLIENT.get_or_init(|| {
        BackendClientBuilder::new()
            .base_url(api_url())
            .build()
            .expect("Failed to create backend client - invalid SONGCHAIN_API_URL")
    })
}
