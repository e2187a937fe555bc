//! Application paths and the navigation guard.
//!
//! | Path | View | Access |
//! |------|------|--------|
//! | `/login` | Login form | public |
//! | `/` | Collection list | protected |
//! | `/set/{set_id}` | Set detail | protected |
//! | `/card/{card_id}` | Card detail | protected |

use std::fmt;

use crate::types::AuthState;

/// A location in the app
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppPath {
    Login,
    Collection,
    Set(String),
    Card(String),
    /// Anything else; rendered as the collection list
    NotFound(String),
}

impl AppPath {
    /// Parse a path. A leading `#` (fragment routing) and a trailing `/`
    /// are ignored.
    pub fn parse(raw: &str) -> Self {
        let path = raw.strip_prefix('#').unwrap_or(raw);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppPath::Collection,
            ["login"] => AppPath::Login,
            ["set", id] => AppPath::Set(id.to_string()),
            ["card", id] => AppPath::Card(id.to_string()),
            _ => AppPath::NotFound(path.to_string()),
        }
    }

    /// Everything except the login view needs a session
    pub fn is_protected(&self) -> bool {
        !matches!(self, AppPath::Login)
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppPath::Login => f.write_str("/login"),
            AppPath::Collection => f.write_str("/"),
            AppPath::Set(id) => write!(f, "/set/{id}"),
            AppPath::Card(id) => write!(f, "/card/{id}"),
            AppPath::NotFound(path) => f.write_str(path),
        }
    }
}

/// What the navigation layer should do with a requested path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the requested view
    Allow,
    /// Not logged in: show the login view, remembering where we were going
    RedirectToLogin { from: AppPath },
    /// Already logged in and asking for the login view
    RedirectHome,
}

/// Decide whether `path` may render under `state`
pub fn guard(state: &AuthState, path: &AppPath) -> GuardOutcome {
    match (path.is_protected(), state.is_authenticated()) {
        (true, false) => GuardOutcome::RedirectToLogin { from: path.clone() },
        (false, true) => GuardOutcome::RedirectHome,
        _ => GuardOutcome::Allow,
    }
}
