use dioxus::prelude::*;

/// Transient error strip. Messages are free text; some callers clear them
/// on a timer, others on the next action.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "mb-4 p-3 bg-red-500/10 border border-red-500/50 rounded text-red-400 text-sm font-mono flex items-center gap-2",
            svg {
                class: "w-4 h-4 shrink-0",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
                }
            }
            "{message}"
        }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div { class: "mb-4 p-3 bg-chain-accent/10 border border-chain-accent/50 rounded text-chain-accent text-sm font-mono flex items-center gap-2",
            svg {
                class: "w-4 h-4 shrink-0",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
                }
            }
            "{message}"
        }
    }
}
