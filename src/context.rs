//! Session context provider for PokeHolo.
//!
//! The [`Session`] is opened once by the root `App` component and handed to
//! every view through Dioxus context, wrapped in a `Signal` so that login
//! and logout re-render whatever reads it.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut session = use_session();
//! let name = session.read().user().map(|u| u.username.clone());
//! session.write().logout();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use pokeholo_core::{FileStore, MemoryStore, Session};

use crate::app::Route;

/// Shared session type for context.
pub type SessionHandle = Signal<Session>;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the session backed by the data directory.
///
/// If the directory cannot be created the app still runs, with a session
/// that lives only as long as the window.
pub fn open_session() -> Session {
    let data_dir = get_data_dir();
    match FileStore::open(&data_dir) {
        Ok(store) => Session::open(store),
        Err(e) => {
            tracing::error!(?data_dir, error = %e, "Cannot open session storage, using memory");
            Session::open(MemoryStore::new())
        }
    }
}

/// Hook to access the session from context.
///
/// # Example
///
/// ```ignore
/// let session = use_session();
/// if session.read().state().is_authenticated() {
///     // ...
/// }
/// ```
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Where the user was headed before being sent to the login view.
///
/// Set by the guard on redirect; the login view consumes it after a
/// successful sign-in.
pub fn use_pending_redirect() -> Signal<Option<Route>> {
    use_context::<Signal<Option<Route>>>()
}
