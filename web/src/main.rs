use auth::{use_auth, AuthProvider};
use dioxus::prelude::*;

use shared::TokenInfo;
use ui::{Button, ButtonVariant, Layout, Navbar};
use views::{DashboardPage, LoginPage};

mod auth;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthGuard)]
        #[route("/login")]
        LoginPage {},

        #[layout(WebNavbar)]
            #[route("/")]
            DashboardPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "SongChain" }

        AuthProvider { Router::<Route> {} }
    }
}

#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current = use_route::<Route>();

    let on_login = matches!(current, Route::LoginPage {});
    let redirect = guard_redirect(auth.is_authenticated(), on_login);

    use_effect(move || {
        if let Some(route) = guard_redirect(auth.is_authenticated(), on_login) {
            nav.replace(route);
        }
    });

    // While a redirect is pending, mount nothing: a protected view must not
    // render (or fire its requests) for a visitor without a live session.
    if redirect.is_some() {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Where the router must send the user when the current location does not
/// match the session state.
fn guard_redirect(is_authenticated: bool, on_login_page: bool) -> Option<Route> {
    match (is_authenticated, on_login_page) {
        (false, false) => Some(Route::LoginPage {}),
        (true, true) => Some(Route::DashboardPage {}),
        _ => None,
    }
}

#[component]
fn WebNavbar() -> Element {
    let mut auth = use_auth();

    let logout = move |_| {
        spawn(async move {
            auth.logout().await;
        });
    };

    rsx! {
        Layout {
            Navbar {
                if let Some(expiry) = auth.token_info().and_then(|info| token_expiry_label(&info)) {
                    span { class: "hidden md:block text-xs font-mono text-gray-500 tracking-wider",
                        "SESSION UNTIL {expiry}"
                    }
                    div { class: "h-4 w-px bg-white/10" }
                }

                Button { variant: ButtonVariant::Danger, onclick: logout, "Logout" }
            }

            main { class: "px-4 sm:px-6 lg:px-8 flex-grow flex flex-col relative overflow-y-auto w-full py-8 no-scrollbar",
                Outlet::<Route> {}
            }
        }
    }
}

fn token_expiry_label(info: &TokenInfo) -> Option<String> {
    let expiry = info.expires_at_utc()?;
    Some(expiry.format("%H:%M UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_visitor_is_sent_to_login() {
        assert_eq!(guard_redirect(false, false), Some(Route::LoginPage {}));
    }

    #[test]
    fn authenticated_visitor_on_login_is_sent_to_the_dashboard() {
        assert_eq!(guard_redirect(true, true), Some(Route::DashboardPage {}));
    }

    #[test]
    fn matching_session_and_location_stay_put() {
        assert_eq!(guard_redirect(true, false), None);
        assert_eq!(guard_redirect(false, true), None);
    }

    fn token(expires_at: i64) -> TokenInfo {
        TokenInfo {
            access_token: "tok".into(),
            refresh_token: None,
            expires_at,
        }
    }

    #[test]
    fn expiry_label_is_utc_wall_clock() {
        // 2023-11-14T22:13:20Z
        assert_eq!(
            token_expiry_label(&token(1_700_000_000)).as_deref(),
            Some("22:13 UTC")
        );
    }

    #[test]
    fn unrepresentable_expiry_has_no_label() {
        assert!(token_expiry_label(&token(i64::MAX)).is_none());
    }
}
