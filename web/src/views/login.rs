use std::future::Future;
use std::pin::Pin;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use songchain::client;
use ui::{ConnectCallback, ConnectPanel};

#[component]
pub fn LoginPage() -> Element {
    let connect: ConnectCallback =
        Callback::new(|_: ()| -> Pin<Box<dyn Future<Output = Result<(), String>>>> {
            Box::pin(async move {
                let auth_url = client()
                    .login_url()
                    .await
                    .map_err(|e| format!("Failed to initiate Spotify login: {e}"))?;

                info!("Redirecting to Spotify authorization");
                redirect_to(&auth_url)
            })
        });

    rsx! {
        ConnectPanel { connect }
    }
}

/// Full top-level navigation to the authorization URL. This is a page
/// handoff to Spotify, not an in-app route change.
fn redirect_to(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
        window
            .location()
            .set_href(url)
            .map_err(|_| "Navigation failed".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Ok(())
    }
}
