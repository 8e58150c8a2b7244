use dioxus::prelude::*;
use shared::Track;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// 1-based position shown to the user; also the play order.
    pub position: usize,
    pub track: Track,
    pub on_remove: EventHandler<String>,
}

#[component]
pub fn ChainItem(props: Props) -> Element {
    let track = props.track.clone();
    let artists = track.artist_line();

    rsx! {
        div { class: "flex items-center gap-4",
            div { class: "text-gray-500 font-mono select-none w-5 text-right", "{props.position}" }
            if let Some(url) = track.thumbnail() {
                img {
                    class: "w-10 h-10 rounded",
                    src: "{url}",
                    alt: "{track.album.name}",
                }
            }
            div { class: "flex-1 min-w-0",
                div { class: "font-medium text-white truncate", "{track.name}" }
                div { class: "text-sm text-gray-400 font-mono truncate", "{artists}" }
            }
            button {
                class: "p-2 text-red-400 hover:text-red-300 hover:bg-red-500/10 rounded-full cursor-pointer",
                onclick: move |_| props.on_remove.call(props.track.id.clone()),
                "×"
            }
        }
    }
}
