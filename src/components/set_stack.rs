//! Set Stack Component
//!
//! One row of the collection list: a fanned stack of cards with the set's
//! cover on top, and a short blurb beside it. Rows alternate sides.

use dioxus::prelude::*;
use pokeholo_core::{catalog, EntrySide};

#[derive(Props, Clone, PartialEq)]
pub struct SetStackProps {
    pub set_id: String,
    pub side: EntrySide,
    pub onclick: EventHandler<String>,
}

#[component]
pub fn SetStack(props: SetStackProps) -> Element {
    let set = catalog::set_or_default(&props.set_id);
    let side_class = match props.side {
        EntrySide::Left => "set-stack set-stack--left",
        EntrySide::Right => "set-stack set-stack--right",
    };
    let set_id = set.id.clone();

    rsx! {
        div {
            class: "{side_class}",
            onclick: move |_| props.onclick.call(set_id.clone()),

            div { class: "set-stack__pile",
                div { class: "set-stack__back set-stack__back--far" }
                div { class: "set-stack__back set-stack__back--near" }

                div { class: "set-stack__cover",
                    img { src: "{set.cover_image}", alt: "{set.name}" }
                    div { class: "set-stack__caption",
                        h3 { class: "set-stack__name", "{set.name}" }
                        div { class: "set-stack__meta",
                            span { "{set.series}" }
                            span { class: "set-stack__count", "\u{25A4} {set.total_cards}" }
                        }
                    }
                    div { class: "set-stack__shine" }
                }
            }

            div { class: "set-stack__blurb",
                span { class: "set-stack__release", "Release: {set.release_date}" }
                p {
                    "Explore the {set.name} collection featuring {set.total_cards} unique cards. "
                    "Contains highly sought-after Holofoil rares from the {set.series} era."
                }
                div { class: "set-stack__rule" }
            }
        }
    }
}
