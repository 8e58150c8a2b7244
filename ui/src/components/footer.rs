use dioxus::prelude::*;
use songchain::client;

use crate::components::BackendStatus;

#[component]
pub fn Footer() -> Element {
    let health = use_resource(move || async move { client().check_connection().await });
    let online = health.read().unwrap_or(false);

    rsx! {
        footer { class: "flex justify-between items-center py-4 border-t border-white/5 text-xs font-mono text-gray-600",
            span { "SONGCHAIN" }
            BackendStatus { online }
        }
    }
}
