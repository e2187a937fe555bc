//! Fallback for unknown paths.
//!
//! Any location outside the route table is sent to the collection list,
//! which itself sits behind the guard.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    use_effect(move || {
        tracing::debug!(path = %path, "Unknown path, redirecting to the collection");
        navigator.replace(Route::Home {});
    });

    rsx! {
        div { class: "loading-state",
            p { class: "loading-message", "Searching Archives..." }
        }
    }
}
