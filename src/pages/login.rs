//! Login page - the only public view.
//!
//! Checks the hardcoded admin credentials after a short simulated delay,
//! then sends the user back to wherever the guard intercepted them.

use dioxus::prelude::*;
use pokeholo_core::{check_credentials, guard, AppPath, GuardOutcome, LOGIN_DELAY};
use pokeholo_ui::{AmbientBackdrop, Button, ButtonVariant, Input, PasswordInput};

use crate::app::Route;
use crate::context::{use_pending_redirect, use_session};

/// Login page component.
///
/// Already logged-in visitors are sent straight to the collection.
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let mut pending = use_pending_redirect();

    let mut username = use_signal(|| "admin".to_string());
    let mut password = use_signal(|| "123456".to_string());
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut loading = use_signal(|| false);

    // Checked once on mount; a login from this page navigates by itself
    use_effect(move || {
        if guard(session.peek().state(), &AppPath::Login) == GuardOutcome::RedirectHome {
            navigator.replace(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        error.set(None);
        loading.set(true);

        spawn(async move {
            // Simulated network round-trip
            tokio::time::sleep(LOGIN_DELAY).await;

            let name = username();
            match check_credentials(&name, &password()) {
                Ok(()) => {
                    if let Err(e) = session.write().login(&name) {
                        tracing::error!(error = %e, "Login was not persisted");
                    }
                    let target = pending.take().unwrap_or(Route::Home {});
                    tracing::info!(to = %target, "Signed in");
                    navigator.replace(target);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            AmbientBackdrop {}

            div { class: "login-panel",
                div { class: "login-header",
                    div { class: "login-mark", "P" }
                    h2 { class: "login-title", "Welcome Back" }
                    p { class: "login-subtitle",
                        "Enter your credentials to access your collection."
                    }
                }

                form { class: "login-form", onsubmit: on_submit,
                    Input {
                        id: "username".to_string(),
                        value: username(),
                        oninput: move |s| username.set(s),
                        label: "Username".to_string(),
                        placeholder: "Enter username".to_string(),
                    }

                    PasswordInput {
                        id: "password".to_string(),
                        value: password(),
                        oninput: move |s| password.set(s),
                        label: "Password".to_string(),
                        placeholder: "Enter password".to_string(),
                    }

                    if let Some(message) = error() {
                        div { class: "login-error", role: "alert", "{message}" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        disabled: loading(),
                        class: "login-submit".to_string(),
                        if loading() {
                            span { class: "spinner" }
                            "Authenticating..."
                        } else {
                            "Sign In"
                        }
                    }
                }

                p { class: "login-footnote", "Admin Access Only: Use standard credentials." }
            }
        }
    }
}
