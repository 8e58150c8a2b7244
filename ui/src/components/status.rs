use dioxus::prelude::*;

#[component]
pub fn BackendStatus(online: bool) -> Element {
    rsx! {
        span { class: "flex items-center gap-2 text-xs font-mono text-gray-500",
            span {
                class: format!(
                    "w-2 h-2 rounded-full {}",
                    if online { "bg-chain-accent animate-pulse" } else { "bg-red-500" },
                ),
            }
            if online {
                "BACKEND ONLINE"
            } else {
                "BACKEND OFFLINE"
            }
        }
    }
}
