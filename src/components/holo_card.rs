//! Holographic Card Component
//!
//! Renders a card as a layered stack that tilts under the pointer:
//!
//! ```text
//! holo-card               pointer events, perspective
//! └─ holo-card__body      rotateX/rotateY applied here, all layers tilt together
//!    ├─ holo-card__base   themed panel: header, art, badges, text, footer
//!    ├─ card-holo         rainbow sheen at the inverted glare position
//!    ├─ card-glare        white highlight at the glare position
//!    └─ holo-card__edge   thickness strips (active presentation only)
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use pokeholo_core::{Card, HoloState, SurfaceRect};
use pokeholo_ui::TypeBadges;

use crate::theme::colors::card_theme;

#[derive(Props, Clone, PartialEq)]
pub struct HoloCardProps {
    pub card: Card,
    /// Enlarged detail presentation, with edge decorations
    #[props(default = false)]
    pub active: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

#[component]
pub fn HoloCard(props: HoloCardProps) -> Element {
    let mut holo = use_signal(HoloState::new);
    let mut surface: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    // Bumped on every leave so a move whose measurement resolves late
    // cannot re-tilt a card the pointer already left.
    let mut leaves = use_signal(|| 0u64);

    let on_move = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        let epoch = *leaves.peek();
        spawn(async move {
            let Some(el) = surface() else {
                return;
            };
            match el.get_client_rect().await {
                Ok(rect) => {
                    if *leaves.peek() != epoch {
                        return;
                    }
                    let rect = SurfaceRect::new(
                        rect.origin.x,
                        rect.origin.y,
                        rect.size.width,
                        rect.size.height,
                    );
                    holo.write().pointer_move(point.x, point.y, rect);
                }
                Err(e) => tracing::trace!(error = ?e, "Could not measure card surface"),
            }
        });
    };

    let on_leave = move |_: MouseEvent| {
        leaves += 1;
        holo.write().pointer_leave();
    };

    let onclick = props.onclick;
    let card = &props.card;
    let state = holo();
    let theme = card_theme(card.primary_type());
    let container_class = if props.active {
        "holo-card holo-card--active"
    } else {
        "holo-card"
    };

    rsx! {
        div {
            class: "{container_class}",
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            onmousemove: on_move,
            onmouseleave: on_leave,

            div {
                class: "holo-card__body",
                style: "transform: {state.transform_css()};",
                onmounted: move |evt| surface.set(Some(evt.data())),

                // Card base
                div {
                    class: "holo-card__base",
                    style: "background: {theme.gradient()};",

                    div { class: "holo-card__header",
                        span { class: "holo-card__name", "{card.name}" }
                        span { class: "holo-card__hp", "{card.hp} HP" }
                    }

                    div { class: "holo-card__art",
                        img { src: "{card.image}", alt: "{card.name}" }
                    }

                    div { class: "holo-card__details",
                        TypeBadges { types: card.types.clone() }
                        p { class: "holo-card__description", "{card.description}" }
                    }

                    div { class: "holo-card__footer",
                        span { class: "holo-card__id", "{card.id}/{card.set_id}" }
                        span {
                            class: "holo-card__rarity {card.rarity.css_class()}",
                            "{card.rarity}"
                        }
                    }

                    div { class: "holo-card__texture" }
                }

                // Holo sheen
                div { class: "card-holo", style: "{state.holo_style()}" }

                // Glare
                div { class: "card-glare", style: "{state.glare_style()}" }

                if props.active {
                    div { class: "holo-card__edge holo-card__edge--right" }
                    div { class: "holo-card__edge holo-card__edge--left" }
                }
            }
        }
    }
}
