use dioxus::prelude::*;
use shared::Track;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub track: Track,
    /// Already part of the chain; the add action becomes a no-op anyway,
    /// but showing it avoids a pointless click.
    pub added: bool,
    pub on_add: EventHandler<Track>,
}

#[component]
pub fn TrackCard(props: Props) -> Element {
    let track = props.track.clone();
    let artists = track.artist_line();

    rsx! {
        div { class: "bg-white/5 border border-white/5 p-3 rounded-lg hover:border-chain-accent/50 hover:bg-white/10 transition-all duration-200 group flex justify-between items-center",
            div { class: "flex items-center gap-4 min-w-0",
                if let Some(url) = track.thumbnail() {
                    img {
                        class: "w-10 h-10 rounded",
                        src: "{url}",
                        alt: "{track.album.name}",
                    }
                }
                div { class: "min-w-0",
                    h5 { class: "text-md font-bold text-white group-hover:text-chain-accent transition-colors truncate",
                        "{track.name}"
                    }
                    p { class: "text-sm text-gray-400 font-mono truncate", "{artists}" }
                }
            }

            button {
                class: if props.added { "p-2 text-gray-600 cursor-default" } else { "p-2 text-chain-accent hover:bg-chain-accent/10 rounded-full cursor-pointer" },
                disabled: props.added,
                onclick: move |_| props.on_add.call(props.track.clone()),
                svg {
                    class: "w-5 h-5",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: if props.added { "M5 13l4 4L19 7" } else { "M12 4v16m8-8H4" },
                    }
                }
            }
        }
    }
}
