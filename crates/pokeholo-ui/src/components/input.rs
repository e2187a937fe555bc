//! Input Field Components
//!
//! Labelled text and password inputs for the login form.

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut username = use_signal(|| "admin".to_string());
///
/// rsx! {
///     Input {
///         id: "username".to_string(),
///         value: username(),
///         oninput: move |s| username.set(s),
///         label: "Username".to_string(),
///         placeholder: "Enter username".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = class_list("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Input `type` for a password field in the given visibility
pub fn password_input_type(revealed: bool) -> &'static str {
    if revealed {
        "text"
    } else {
        "password"
    }
}

/// Properties for the PasswordInput component
#[derive(Clone, PartialEq, Props)]
pub struct PasswordInputProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Password field with a show/hide toggle
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let mut revealed = use_signal(|| false);
    let toggle_label = if revealed() { "Hide password" } else { "Show password" };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            div { class: "password-wrapper",
                input {
                    id: "{props.id}",
                    class: "input-field",
                    r#type: password_input_type(revealed()),
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| props.oninput.call(e.value()),
                }
                button {
                    r#type: "button",
                    class: "password-toggle",
                    "aria-label": "{toggle_label}",
                    onclick: move |_| revealed.set(!revealed()),
                    if revealed() { "\u{25C9}" } else { "\u{25CE}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_type_follows_visibility() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }
}
