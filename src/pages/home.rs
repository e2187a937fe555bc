//! Home page - the collection list.
//!
//! Shows every set as a card stack and keeps appending copies of the
//! catalog as the list is scrolled towards its end.

use std::rc::Rc;

use dioxus::prelude::*;
use pokeholo_core::feed::near_bottom;
use pokeholo_core::{SetFeed, LOAD_DELAY};

use crate::app::Route;
use crate::components::SetStack;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let mut feed = use_signal(SetFeed::new);
    let mut scroller: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Request the next page; ignored while one is in flight
    let mut load_more = move || {
        if !feed.write().begin_load() {
            return;
        }
        spawn(async move {
            tokio::time::sleep(LOAD_DELAY).await;
            feed.write().finish_load();
        });
    };

    use_hook(move || load_more());

    let on_scroll = move |_: ScrollEvent| {
        spawn(async move {
            let Some(el) = scroller() else {
                return;
            };
            let (Ok(offset), Ok(size), Ok(rect)) = (
                el.get_scroll_offset().await,
                el.get_scroll_size().await,
                el.get_client_rect().await,
            ) else {
                return;
            };
            if near_bottom(rect.size.height, offset.y, size.height) {
                load_more();
            }
        });
    };

    let entries = feed.read().entries();
    let loading = feed.read().is_loading();

    rsx! {
        div {
            class: "home",
            onmounted: move |evt| scroller.set(Some(evt.data())),
            onscroll: on_scroll,

            div { class: "home-inner",
                div { class: "home-header",
                    h2 { class: "page-title", "Your Collections" }
                    p { class: "page-subtitle", "Select a deck to view your holographic cards." }
                }

                div { class: "set-list",
                    for entry in entries {
                        SetStack {
                            key: "{entry.key()}",
                            set_id: entry.set.id.clone(),
                            side: entry.side(),
                            onclick: move |set_id: String| {
                                navigator.push(Route::SetView { set_id });
                            },
                        }
                    }
                }

                if loading {
                    div { class: "loading-indicator", "aria-label": "Loading more sets",
                        span { class: "loading-chevron", "\u{2304}" }
                    }
                }
            }
        }
    }
}
