//! Card Detail - one card, enlarged, with its stats.
//!
//! Handles `/card/:card_id`. An unknown id shows the first card of the
//! first set.

use dioxus::prelude::*;
use pokeholo_core::catalog;
use pokeholo_ui::{Button, ButtonVariant, CloseButton};

use crate::components::HoloCard;
use crate::theme::colors::{accent_color, backdrop_theme};

#[component]
pub fn CardDetail(card_id: String) -> Element {
    let navigator = use_navigator();
    let card = catalog::card_or_default(&card_id);
    // View-local; favourites are not persisted
    let mut favourite = use_signal(|| false);

    let primary = card.primary_type();
    let backdrop = backdrop_theme(primary).gradient();
    let accent = accent_color(primary);
    let types_label = card.types.join(" / ");
    let favourite_label = if favourite() {
        "In Favorites"
    } else {
        "Add to Favorites"
    };

    rsx! {
        div { class: "card-detail",
            div { class: "card-detail__ambient", style: "background: {backdrop};" }

            div { class: "card-detail__close",
                CloseButton { onclick: move |_| navigator.go_back() }
            }

            div { class: "card-detail__layout",
                // The main stage
                div { class: "card-detail__stage",
                    div { class: "card-detail__frame",
                        HoloCard { card: card.clone(), active: true }
                        p { class: "card-detail__hint",
                            "Hover or tilt to inspect holographic details"
                        }
                    }
                }

                // Info panel
                div { class: "card-detail__info",
                    div {
                        div { class: "card-detail__tags",
                            span {
                                class: "card-detail__types",
                                style: "color: {accent};",
                                "{types_label}"
                            }
                            span { class: "card-detail__rarity", "{card.rarity}" }
                        }
                        h1 { class: "card-detail__name", "{card.name}" }
                        p { class: "card-detail__quote", "\u{201C}{card.description}\u{201D}" }
                    }

                    div { class: "stat-grid",
                        div { class: "stat",
                            span { class: "stat__label", "Hit Points" }
                            span { class: "stat__value stat__value--hp", "{card.hp}" }
                        }
                        div { class: "stat",
                            span { class: "stat__label", "Set Number" }
                            span { class: "stat__value",
                                "{card.number()} "
                                span { class: "stat__suffix", "/ {card.set_id}" }
                            }
                        }
                    }

                    div { class: "card-detail__actions",
                        Button {
                            variant: ButtonVariant::Light,
                            class: "card-detail__favourite".to_string(),
                            onclick: move |_| favourite.set(!favourite()),
                            span { class: if favourite() { "heart heart--filled" } else { "heart" }, "\u{2665}" }
                            "{favourite_label}"
                        }
                        Button {
                            variant: ButtonVariant::Glass,
                            onclick: move |_| tracing::debug!(card_id = %card_id, "Share requested"),
                            "Share"
                        }
                        Button { variant: ButtonVariant::Glass, "Info" }
                    }
                }
            }
        }
    }
}
