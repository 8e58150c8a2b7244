pub mod item;

use dioxus::prelude::*;
use shared::{Selection, Track};

use item::ChainItem;

/// The ordered chain being assembled. Items are draggable; dropping one on
/// another slots it into that position. Dropping outside the list does
/// nothing. `on_reorder` carries (source index, destination index).
#[component]
pub fn SelectionPanel(
    selection: Selection,
    on_remove: EventHandler<String>,
    on_reorder: EventHandler<(usize, usize)>,
) -> Element {
    let drag_from = use_signal::<Option<usize>>(|| None);
    let drag_over = use_signal::<Option<usize>>(|| None);

    rsx! {
        div { class: "bg-chain-panel border border-white/10 rounded-lg p-6 flex flex-col",
            h4 { class: "text-lg font-bold text-chain-accent uppercase tracking-wider",
                "Selected Songs"
            }
            p { class: "text-xs text-gray-500 font-mono mb-4",
                "Place them in the order you would like them to play"
            }

            if selection.is_empty() {
                div { class: "text-center text-gray-500 py-10 text-sm font-mono",
                    "Add songs from the search results to create your chain"
                }
            } else {
                ul { class: "list-none p-0 space-y-2 min-h-[200px] max-h-[60vh] overflow-y-auto no-scrollbar",
                    for (index , track) in selection.tracks().iter().enumerate() {
                        ChainRow {
                            key: "{track.id}",
                            index,
                            track: track.clone(),
                            drag_from,
                            drag_over,
                            on_remove: move |id| on_remove.call(id),
                            on_reorder: move |indices| on_reorder.call(indices),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChainRow(
    index: usize,
    track: Track,
    mut drag_from: Signal<Option<usize>>,
    mut drag_over: Signal<Option<usize>>,
    on_remove: EventHandler<String>,
    on_reorder: EventHandler<(usize, usize)>,
) -> Element {
    let highlight = if drag_over() == Some(index) && drag_from() != Some(index) {
        "border-chain-accent/70 bg-chain-accent/5"
    } else {
        "border-white/5"
    };

    rsx! {
        li {
            class: "p-3 bg-white/5 border {highlight} rounded-lg cursor-grab active:cursor-grabbing transition-colors",
            draggable: "true",
            ondragstart: move |_| drag_from.set(Some(index)),
            ondragover: move |e| {
                e.prevent_default();
                drag_over.set(Some(index));
            },
            ondragleave: move |_| {
                if drag_over() == Some(index) {
                    drag_over.set(None);
                }
            },
            ondrop: move |e| {
                e.prevent_default();
                drag_over.set(None);
                if let Some(from) = drag_from.take() {
                    if from != index {
                        on_reorder.call((from, index));
                    }
                }
            },
            // drag ended without a valid drop target: leave the order alone
            ondragend: move |_| {
                drag_from.set(None);
                drag_over.set(None);
            },
            ChainItem {
                position: index + 1,
                track,
                on_remove: move |id| on_remove.call(id),
            }
        }
    }
}
