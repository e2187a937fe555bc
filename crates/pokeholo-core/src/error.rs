//! Error types for PokeHolo

use thiserror::Error;

/// Failures of the key-value storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file or a value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of session mutations.
///
/// The in-memory state is always updated; these only report that the
/// write-through to storage did not land.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Session state could not be written to storage
    #[error("Failed to persist session: {0}")]
    Persist(#[source] StorageError),
}

/// Credential check failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username/password pair did not match
    #[error("Invalid credentials. Hint: admin / 123456")]
    InvalidCredentials,
}

/// Umbrella error for callers that deal with several subsystems
#[derive(Error, Debug)]
pub enum PokeholoError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials. Hint: admin / 123456"
        );
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: PokeholoError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), AuthError::InvalidCredentials.to_string());
    }
}
