use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "flex justify-between items-center py-6 border-b border-white/5",
            // Logo area
            div { class: "flex items-center gap-3 group cursor-default",
                div { class: "w-10 h-10 bg-chain-accent rounded-sm flex items-center justify-center shadow-[0_0_15px_rgba(29,185,84,0.5)] group-hover:rotate-12 transition-transform",
                    svg {
                        class: "w-6 h-6 text-white",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M13.828 10.172a4 4 0 00-5.656 0l-4 4a4 4 0 105.656 5.656l1.102-1.101m-.758-4.899a4 4 0 005.656 0l4-4a4 4 0 00-5.656-5.656l-1.1 1.1",
                        }
                    }
                }
                h1 { class: "text-2xl font-bold tracking-tighter uppercase text-transparent bg-clip-text bg-gradient-to-r from-white to-gray-400",
                    "SongChain"
                }
            }

            // Menu
            nav { class: "flex items-center gap-8 bg-chain-panel/50 px-6 py-2 rounded-full border border-white/5 backdrop-blur-sm",
                {children}
            }
        }
    }
}
