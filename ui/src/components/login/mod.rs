use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;

/// Resolves once the OAuth handoff has been initiated (or failed with a
/// user-visible message). On success the browser is navigating away, so
/// nothing further happens here.
pub type ConnectCallback = Callback<(), Pin<Box<dyn Future<Output = Result<(), String>>>>>;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    connect: ConnectCallback,
}

#[component]
pub fn ConnectPanel(props: Props) -> Element {
    let mut error = use_signal(|| "".to_string());
    let mut connecting = use_signal(|| false);

    let handle_connect = move || {
        spawn(async move {
            error.set("".to_string());
            connecting.set(true);
            if let Err(e) = props.connect.call(()).await {
                error.set(e);
                connecting.set(false);
            }
            // on success the page is being replaced by the Spotify
            // authorization screen; keep the button disabled
        });
    };

    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-screen text-white font-display",
            div { class: "fixed top-1/4 -left-10 w-64 h-64 bg-chain-accent/10 rounded-full blur-[150px] pointer-events-none" }
            div { class: "p-8 bg-chain-panel border border-white/10 rounded-lg shadow-2xl w-full max-w-md relative z-10",
                // Header
                div { class: "flex flex-col items-center mb-8",
                    div { class: "w-12 h-12 bg-chain-accent rounded-sm flex items-center justify-center shadow-[0_0_15px_rgba(29,185,84,0.5)] mb-4 rotate-3 hover:rotate-6 transition-transform",
                        svg {
                            class: "w-8 h-8 text-white",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M9 19V6l12-3v13M9 19c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zm12-3c0 1.105-1.343 2-3 2s-3-.895-3-2 1.343-2 3-2 3 .895 3 2zM9 10l12-3",
                            }
                        }
                    }
                    h1 { class: "text-2xl font-bold tracking-tighter uppercase text-transparent bg-clip-text bg-gradient-to-r from-white to-gray-400",
                        "SongChain"
                    }
                    p { class: "text-sm text-chain-accent font-mono mt-2 tracking-widest",
                        "CHAIN YOUR QUEUE"
                    }
                }

                div { class: "space-y-6",
                    p { class: "text-center text-sm text-gray-400",
                        "Connect your Spotify account to search tracks and build play chains."
                    }

                    if !error().is_empty() {
                        div { class: "p-3 bg-red-500/10 border border-red-500/50 rounded text-red-400 text-sm font-mono text-center",
                            "{error}"
                        }
                    }

                    button {
                        class: "w-full chain-btn flex justify-center items-center gap-2 group",
                        disabled: connecting(),
                        onclick: move |_| handle_connect(),
                        span {
                            if connecting() {
                                "CONNECTING..."
                            } else {
                                "CONNECT WITH SPOTIFY"
                            }
                        }
                        svg {
                            class: "w-4 h-4 group-hover:translate-x-1 transition-transform",
                            fill: "none",
                            view_box: "0 0 24 24",
                            stroke: "currentColor",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M14 5l7 7m0 0l-7 7m7-7H3",
                            }
                        }
                    }
                }
            }
        }
    }
}
