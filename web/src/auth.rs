use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::AuthStatus;
use songchain::client;
use ui::Auth;

pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    // One credentialed status check per mount. Any failure means logged
    // out; a network error must never look like a valid session.
    let auth_state = use_resource(move || async move {
        match client().auth_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!("Auth status check failed: {e}");
                AuthStatus::logged_out()
            }
        }
    });

    let mut auth_signal = use_signal(|| None::<AuthStatus>);
    let mut initialized = use_signal(|| false);

    use_effect(move || {
        if let Some(status) = auth_state.read().clone() {
            auth_signal.set(Some(status));
            initialized.set(true);
        }
    });

    use_context_provider(|| Auth::new(auth_signal));

    // Placeholder until the check resolves; guards only run on a settled
    // session, never on a loading one.
    if !*initialized.read() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center h-screen",
                div { class: "animate-spin rounded-full h-16 w-16 border-t-4 border-b-4 border-chain-accent mb-6" }
                h1 { class: "text-2xl font-bold text-chain-accent animate-pulse", "SongChain" }
            }
        };
    }

    rsx! {
        {children}
    }
}
