pub mod track;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::{Selection, Track};
use songchain::client;

use crate::components::{Button, ErrorBanner};
use crate::use_auth;
use track::TrackCard;

const SEARCH_FAILED: &str = "Failed to search songs.";
const AUTH_EXPIRED: &str = "Authentication expired, please log in again.";

/// Catalog search. `selection` is the current chain, used to mark tracks
/// that are already in it.
#[component]
pub fn SearchPanel(selection: Selection, on_add: EventHandler<Track>) -> Element {
    let auth = use_auth();
    let mut query = use_signal(String::new);
    let mut results = use_signal::<Vec<Track>>(Vec::new);
    let mut searching = use_signal(|| false);
    let mut error = use_signal::<Option<String>>(|| None);
    // Sequence number of the most recently issued search. Responses
    // arriving for an older number are dropped, so the results always
    // belong to the last query the user fired, not the last reply to land.
    let mut latest_seq = use_signal(|| 0u64);

    let run_search = move || async move {
        let q = query.read().trim().to_string();
        if q.is_empty() {
            return;
        }

        let seq = latest_seq() + 1;
        latest_seq.set(seq);
        searching.set(true);
        error.set(None);

        match auth.call(client().search_tracks(&q)).await {
            Ok(tracks) => {
                if latest_seq() == seq {
                    info!("Search '{}' returned {} tracks", q, tracks.len());
                    results.set(tracks);
                }
            }
            Err(e) => {
                if latest_seq() == seq {
                    warn!("Search failed: {e}");
                    // prior results stay on screen
                    if e.is_auth_expired() {
                        error.set(Some(AUTH_EXPIRED.to_string()));
                    } else {
                        error.set(Some(SEARCH_FAILED.to_string()));
                    }
                }
            }
        }

        if latest_seq() == seq {
            searching.set(false);
        }
    };

    rsx! {
        div { class: "bg-chain-panel border border-white/10 rounded-lg p-6 flex flex-col",
            h4 { class: "text-lg font-bold mb-4 text-chain-accent uppercase tracking-wider",
                "Search Songs"
            }

            div { class: "flex gap-3 mb-4",
                input {
                    value: "{query}",
                    class: "flex-grow bg-chain-dark text-white placeholder-gray-500 px-4 py-2 rounded-md border border-white/10 focus:outline-none focus:border-chain-accent transition-all font-mono",
                    placeholder: "Search for songs...",
                    oninput: move |event| query.set(event.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            spawn(run_search());
                        }
                    },
                }
                Button {
                    disabled: searching() || query.read().trim().is_empty(),
                    onclick: move |_| {
                        spawn(run_search());
                    },
                    if searching() {
                        "Searching..."
                    } else {
                        "Search"
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            div { class: "space-y-2 max-h-[60vh] overflow-y-auto no-scrollbar",
                if results.read().is_empty() {
                    div { class: "text-center text-gray-500 py-10 text-sm font-mono",
                        "Search for something to see results here."
                    }
                } else {
                    for track in results.read().iter() {
                        TrackCard {
                            key: "{track.id}",
                            track: track.clone(),
                            added: selection.contains(&track.id),
                            on_add: move |t| on_add.call(t),
                        }
                    }
                }
            }
        }
    }
}
