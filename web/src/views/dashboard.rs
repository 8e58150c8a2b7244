use std::collections::HashMap;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared::{Selection, SongRef, Track};
use songchain::client;
use ui::{Button, ErrorBanner, SearchPanel, SelectionPanel, SuccessBanner};

use crate::auth::use_auth;

const MIN_CHAIN_ERROR: &str = "Please select at least 2 songs to create a chain.";
const SAVE_FAILED: &str = "Failed to save the chain.";
const AUTH_EXPIRED: &str = "Authentication expired, please log in again.";
const SAVE_SUCCESS: &str = "Song chain saved successfully!";
const BANNER_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
enum Banner {
    Success(&'static str),
    Error(String),
}

/// The single transient banner slot. Every shown banner gets a fresh
/// generation, and a timer may only clear the generation it was started
/// for, so a stale timer can never dismiss a newer banner early.
#[derive(Debug, Clone, PartialEq, Default)]
struct BannerState {
    generation: u64,
    current: Option<Banner>,
}

impl BannerState {
    fn show(&mut self, banner: Banner) -> u64 {
        self.generation += 1;
        self.current = Some(banner);
        self.generation
    }

    fn dismiss(&mut self) {
        self.current = None;
    }

    fn clear_if_current(&mut self, generation: u64) {
        if self.generation == generation {
            self.current = None;
        }
    }

    fn success(&self) -> Option<&'static str> {
        match &self.current {
            Some(Banner::Success(message)) => Some(*message),
            _ => None,
        }
    }

    fn error(&self) -> Option<String> {
        match &self.current {
            Some(Banner::Error(message)) => Some(message.clone()),
            _ => None,
        }
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let auth = use_auth();
    let mut selection = use_signal(Selection::new);
    let mut relationships = use_signal(HashMap::<String, SongRef>::new);
    let mut banner = use_signal(BannerState::default);
    let mut saving = use_signal(|| false);

    // Chains persisted in earlier sessions; the save response replaces this
    let existing = use_resource(move || async move { auth.call(client().relationships()).await });
    use_effect(move || {
        if let Some(Ok(map)) = existing.read().as_ref() {
            relationships.set(map.clone());
        }
    });

    let save_chain = move |_| {
        spawn(async move {
            if !selection.read().is_chainable() {
                // no request leaves this client; the message clears itself
                let shown = banner
                    .write()
                    .show(Banner::Error(MIN_CHAIN_ERROR.to_string()));
                TimeoutFuture::new(BANNER_MS).await;
                banner.write().clear_if_current(shown);
                return;
            }

            saving.set(true);
            banner.write().dismiss();
            let songs = selection.read().to_vec();

            match auth.call(client().save_relationships(songs)).await {
                Ok(map) => {
                    info!("Chain saved ({} links)", map.len());
                    relationships.set(map);
                    selection.write().clear();
                    saving.set(false);

                    let shown = banner.write().show(Banner::Success(SAVE_SUCCESS));
                    TimeoutFuture::new(BANNER_MS).await;
                    banner.write().clear_if_current(shown);
                }
                Err(e) => {
                    warn!("Failed to save chain: {e}");
                    // selection stays intact so the user can retry
                    let message = if e.is_auth_expired() {
                        AUTH_EXPIRED
                    } else {
                        SAVE_FAILED
                    };
                    banner.write().show(Banner::Error(message.to_string()));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "flex justify-between items-center mb-6",
            h2 { class: "text-2xl font-bold tracking-tighter uppercase text-white",
                "Link Your Songs"
            }
            if !selection.read().is_empty() {
                Button { disabled: saving(), onclick: save_chain,
                    if saving() {
                        "Saving..."
                    } else {
                        "Save Order"
                    }
                }
            }
        }

        if let Some(message) = banner.read().success() {
            SuccessBanner { message }
        }

        if let Some(message) = banner.read().error() {
            ErrorBanner { message }
        }

        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
            SearchPanel {
                selection: selection(),
                on_add: move |track: Track| {
                    if !selection.write().add(track) {
                        info!("Track already in the chain, ignoring");
                    }
                },
            }
            SelectionPanel {
                selection: selection(),
                on_remove: move |id: String| {
                    selection.write().remove(&id);
                },
                on_reorder: move |(from, to): (usize, usize)| {
                    selection.write().reorder(from, to);
                },
            }
        }

        if !relationships.read().is_empty() {
            p { class: "mt-6 text-xs font-mono text-gray-500",
                "{relationships.read().len()} saved song links"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_timer_clears_its_banner() {
        let mut state = BannerState::default();
        let shown = state.show(Banner::Error(SAVE_FAILED.to_string()));
        state.clear_if_current(shown);
        assert!(state.current.is_none());
    }

    #[test]
    fn repeated_validation_error_survives_the_first_timer() {
        let mut state = BannerState::default();
        let first = state.show(Banner::Error(MIN_CHAIN_ERROR.to_string()));
        let second = state.show(Banner::Error(MIN_CHAIN_ERROR.to_string()));
        state.clear_if_current(first);
        assert_eq!(state.error().as_deref(), Some(MIN_CHAIN_ERROR));
        state.clear_if_current(second);
        assert!(state.error().is_none());
    }

    #[test]
    fn quick_second_save_keeps_its_success_banner() {
        let mut state = BannerState::default();
        let first = state.show(Banner::Success(SAVE_SUCCESS));
        let _second = state.show(Banner::Success(SAVE_SUCCESS));
        state.clear_if_current(first);
        assert_eq!(state.success(), Some(SAVE_SUCCESS));
    }

    #[test]
    fn dismissing_does_not_arm_old_timers_against_new_banners() {
        let mut state = BannerState::default();
        let first = state.show(Banner::Error(MIN_CHAIN_ERROR.to_string()));
        state.dismiss();
        let _ = state.show(Banner::Success(SAVE_SUCCESS));
        state.clear_if_current(first);
        assert_eq!(state.success(), Some(SAVE_SUCCESS));
    }
}
