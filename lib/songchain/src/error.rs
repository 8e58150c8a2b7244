use thiserror::Error;

pub type Result<T> = std::result::Result<T, BackendError>;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend client is not configured")]
    NotConfigured,

    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: String, detail: String },
}

impl BackendError {
    /// Whether this error means the cookie session is gone and the user
    /// should be treated as logged out.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, BackendError::Api { status: 401, .. })
    }
}
