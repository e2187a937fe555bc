//! Navigation Header Component
//!
//! Sticky header shared by every logged-in view:
//! - Left: brand mark and "POKEHOLO" title, linking home
//! - Right: greeting and logout button

use dioxus::prelude::*;
use pokeholo_ui::IconButton;

use crate::app::Route;
use crate::context::use_session;

/// Layout wrapping the protected views with the header
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            NavHeader {}
            main { class: "shell-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Header bar with the current user and logout
#[component]
pub fn NavHeader() -> Element {
    let mut session = use_session();
    let username = session
        .read()
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    let logout = move |_: ()| {
        // The guard notices the change and sends us to the login view
        if let Err(e) = session.write().logout() {
            tracing::error!(error = %e, "Logout was not persisted");
        }
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                Link { to: Route::Home {}, class: "nav-brand",
                    div { class: "brand-mark", "P" }
                    h1 { class: "brand-title", "POKEHOLO" }
                }

                div { class: "nav-user",
                    span { class: "nav-greeting",
                        "Welcome, "
                        span { class: "nav-username", "{username}" }
                    }
                    IconButton {
                        onclick: logout,
                        aria_label: "Logout".to_string(),
                        {logout_icon()}
                    }
                }
            }
        }
    }
}

/// Lucide log-out icon
fn logout_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", x2: "9", y1: "12", y2: "12" }
        }
    }
}
