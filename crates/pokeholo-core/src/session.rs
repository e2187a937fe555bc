//! Session state holder.
//!
//! A local-only login gate: no tokens, no expiry, no server. The state is
//! read once from storage when the session is opened and written through
//! on every mutation, after which subscribers are notified.
//!
//! ## Usage
//!
//! ```
//! use pokeholo_core::{MemoryStore, Session};
//!
//! let mut session = Session::open(MemoryStore::new());
//! let _id = session.subscribe(|state| println!("authenticated: {}", state.is_authenticated()));
//!
//! session.login("admin").unwrap();
//! session.logout().unwrap();
//! assert!(!session.state().is_authenticated());
//! ```

use tracing::{info, warn};

use crate::error::SessionError;
use crate::storage::KeyValueStore;
use crate::types::{AuthState, Role, User};

/// Storage key holding the serialized [`AuthState`]
pub const SESSION_KEY: &str = "pokeholo_auth";

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&AuthState)>;

/// Process-wide session, passed explicitly to whoever needs it
pub struct Session {
    store: Box<dyn KeyValueStore>,
    state: AuthState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Session {
    /// Open the session, restoring state from `store`.
    ///
    /// Absent, unreadable, malformed or inconsistent state yields a
    /// logged-out session. Nothing is surfaced to the caller.
    pub fn open(store: impl KeyValueStore + 'static) -> Self {
        let state = restore(&store);
        Self {
            store: Box::new(store),
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Currently logged-in user
    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Log `username` in as admin.
    ///
    /// Credentials are not checked here; see [`crate::auth::check_credentials`].
    /// The in-memory state changes even when persisting fails.
    pub fn login(&mut self, username: &str) -> Result<(), SessionError> {
        info!(username = %username, "Logging in");
        self.commit(AuthState::logged_in(User {
            username: username.to_string(),
            role: Role::Admin,
        }))
    }

    /// Clear the session
    pub fn logout(&mut self) -> Result<(), SessionError> {
        info!("Logging out");
        self.commit(AuthState::logged_out())
    }

    /// Register `listener` to run after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, state: AuthState) -> Result<(), SessionError> {
        self.state = state;
        let persisted = self.persist();
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        persisted
    }

    fn persist(&self) -> Result<(), SessionError> {
        let json = serde_json::to_string(&self.state)
            .map_err(|e| SessionError::Persist(e.into()))?;
        self.store.set(SESSION_KEY, &json).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist session");
            SessionError::Persist(e)
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn restore(store: &dyn KeyValueStore) -> AuthState {
    let raw = match store.get(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AuthState::logged_out(),
        Err(e) => {
            warn!(error = %e, "Could not read saved session, starting logged out");
            return AuthState::logged_out();
        }
    };

    match serde_json::from_str::<AuthState>(&raw) {
        Ok(state) if state.is_consistent() => state,
        Ok(_) => {
            warn!("Saved session is inconsistent, starting logged out");
            AuthState::logged_out()
        }
        Err(e) => {
            warn!(error = %e, "Saved session is malformed, starting logged out");
            AuthState::logged_out()
        }
    }
}
