use dioxus::prelude::*;
use shared::{AuthStatus, TokenInfo};
use songchain::{client, BackendError};

/// Process-wide session state. Provided once at the app root; every view
/// reads the same signal instead of re-checking the backend.
#[derive(Clone, Copy, Debug)]
pub struct Auth {
    state: Signal<Option<AuthStatus>>,
}

impl Auth {
    pub fn new(state: Signal<Option<AuthStatus>>) -> Self {
        Self { state }
    }

    pub fn set_status(&mut self, status: AuthStatus) {
        self.state.set(Some(status));
    }

    /// Invalidate the backend session, then drop local state regardless of
    /// whether the backend call succeeded.
    pub async fn logout(&mut self) {
        let _ = client().logout().await;
        self.state.set(Some(AuthStatus::logged_out()));
    }

    /// Check if a backend error means the session expired.
    /// If it does, logs the user out locally.
    /// Returns true if the error was handled (user logged out), false otherwise.
    pub fn handle_error(&mut self, error: &BackendError) -> bool {
        if error.is_auth_expired() {
            self.state.set(Some(AuthStatus::logged_out()));
            return true;
        }
        false
    }

    /// Wraps a backend call to automatically handle session expiry.
    pub async fn call<T>(
        mut self,
        fut: impl std::future::Future<Output = Result<T, BackendError>>,
    ) -> Result<T, BackendError> {
        match fut.await {
            Ok(val) => Ok(val),
            Err(e) => {
                self.handle_error(&e);
                Err(e)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .as_ref()
            .is_some_and(|status| status.authenticated)
    }

    /// Token details of the live session, if any.
    pub fn token_info(&self) -> Option<TokenInfo> {
        self.state
            .read()
            .as_ref()
            .and_then(|status| status.token_info.clone())
    }
}

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}
