//! Ambient Backdrop Component
//!
//! Blurred color orbs placed behind a page's content.

use dioxus::prelude::*;

/// Properties for the AmbientBackdrop component
#[derive(Clone, PartialEq, Props)]
pub struct AmbientBackdropProps {
    /// Color of the top-left orb
    #[props(default = "rgba(147, 51, 234, 0.2)".to_string())]
    pub primary: String,
    /// Color of the bottom-right orb
    #[props(default = "rgba(37, 99, 235, 0.2)".to_string())]
    pub secondary: String,
}

/// Two soft glows in opposite corners, behind everything else
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "login-page",
///         AmbientBackdrop {}
///         // Content goes on top
///     }
/// }
/// ```
#[component]
pub fn AmbientBackdrop(props: AmbientBackdropProps) -> Element {
    rsx! {
        div {
            class: "ambient-backdrop",
            "aria-hidden": "true",
            div {
                class: "ambient-orb ambient-orb--top-left",
                style: "background: {props.primary};",
            }
            div {
                class: "ambient-orb ambient-orb--bottom-right",
                style: "background: {props.secondary};",
            }
        }
    }
}
