//! Set View - every generated card of one set.
//!
//! Handles `/set/:set_id`. An unknown id shows the first catalog set.

use dioxus::prelude::*;
use pokeholo_core::catalog;

use crate::app::Route;
use crate::components::HoloCard;

#[component]
pub fn SetView(set_id: String) -> Element {
    let navigator = use_navigator();
    let set = catalog::set_or_default(&set_id);

    rsx! {
        div { class: "set-view",
            // Hero header
            div { class: "set-hero",
                div { class: "set-hero__bg",
                    img { src: "{set.cover_image}", alt: "" }
                    div { class: "set-hero__fade" }
                }

                div { class: "set-hero__content",
                    button {
                        r#type: "button",
                        class: "back-link",
                        onclick: move |_| {
                            navigator.push(Route::Home {});
                        },
                        "\u{2190} Back to Collections"
                    }
                    h1 { class: "set-hero__title", "{set.name}" }
                    div { class: "set-hero__meta",
                        span { class: "set-hero__series", "{set.series} Series" }
                        span { "Released: {set.release_label()}" }
                        span { "{set.collected()} / {set.total_cards} Collected" }
                    }
                }
            }

            // Grid
            div { class: "card-grid",
                for card in set.cards.iter() {
                    {
                        let card_id = card.id.clone();
                        rsx! {
                            div { key: "{card.id}", class: "card-grid__cell",
                                div { class: "card-grid__lift",
                                    HoloCard {
                                        card: card.clone(),
                                        onclick: move |_| {
                                            navigator.push(Route::CardDetail { card_id: card_id.clone() });
                                        },
                                    }
                                }
                                div { class: "card-grid__label",
                                    p { class: "card-grid__name", "{card.name}" }
                                    p { class: "card-grid__id", "{card.id}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
