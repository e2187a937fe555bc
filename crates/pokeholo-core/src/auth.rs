//! Credential check.
//!
//! A single hardcoded admin account. This is the whole authentication
//! mechanism: no hashing, no backend.

use std::time::Duration;

use crate::error::AuthError;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "123456";

/// Artificial delay the login form waits before checking credentials
pub const LOGIN_DELAY: Duration = Duration::from_millis(800);

/// Accept exactly the admin username/password pair
pub fn check_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        tracing::debug!(username = %username, "Rejected credentials");
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_pair_accepted() {
        assert!(check_credentials("admin", "123456").is_ok());
    }

    #[test]
    fn test_anything_else_rejected() {
        for (u, p) in [("admin", "wrong"), ("Admin", "123456"), ("", ""), ("admin ", "123456")] {
            assert_eq!(check_credentials(u, p), Err(AuthError::InvalidCredentials));
        }
    }
}
