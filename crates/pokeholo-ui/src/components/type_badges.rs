//! Type Badges Component
//!
//! Row of small pill labels for a card's type tags.

use dioxus::prelude::*;

/// Properties for the TypeBadges component
#[derive(Clone, PartialEq, Props)]
pub struct TypeBadgesProps {
    /// Type tags, in card order
    pub types: Vec<String>,
    /// Optional additional CSS classes on the row
    #[props(default)]
    pub class: Option<String>,
}

/// Displays each type tag as an uppercase pill
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypeBadges { types: vec!["Grass".to_string(), "Poison".to_string()] }
/// }
/// ```
#[component]
pub fn TypeBadges(props: TypeBadgesProps) -> Element {
    let row_class = super::button::class_list("type-badges", props.class.as_deref());

    rsx! {
        div { class: "{row_class}",
            for tag in props.types.iter() {
                span {
                    key: "{tag}",
                    class: "type-badge",
                    "{tag}"
                }
            }
        }
    }
}
