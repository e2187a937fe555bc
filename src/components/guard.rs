//! Route guard layout.
//!
//! Wraps every protected route. When the session is not authenticated it
//! remembers the requested route and replaces the location with `/login`.

use dioxus::prelude::*;
use pokeholo_core::{guard, AppPath, GuardOutcome};

use crate::app::Route;
use crate::context::{use_pending_redirect, use_session};

/// Layout that renders its outlet only for a logged-in session
#[component]
pub fn Guarded() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut pending = use_pending_redirect();

    let state = session.read().state().clone();
    let allowed = state.is_authenticated();

    use_effect(use_reactive!(|(state, route)| {
        let path = AppPath::parse(&route.to_string());
        if let GuardOutcome::RedirectToLogin { from } = guard(&state, &path) {
            tracing::debug!(from = %from, "Not logged in, redirecting to login");
            pending.set(Some(route));
            navigator.replace(Route::Login {});
        }
    }));

    if allowed {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! {
            div { class: "loading-state",
                p { class: "loading-message", "Redirecting to login..." }
            }
        }
    }
}
