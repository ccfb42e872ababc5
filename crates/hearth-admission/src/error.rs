use crate::hasher::HasherError;

use hearth_db::DbError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdmissionError {
    #[error("Not authorized: acting account must be an administrator")]
    Unauthorized,

    #[error("No account with handle '{handle}'")]
    NotFound { handle: String },

    #[error("Invalid invite code")]
    InvalidCode,

    #[error("Invite code has expired")]
    CodeExpired,

    #[error("Invite code has already been used")]
    CodeAlreadyUsed,

    #[error("Invite code is bound to a different contact address")]
    ContactMismatch,

    #[error("Handle '{handle}' is already taken")]
    HandleTaken { handle: String },

    #[error("Contact address '{contact}' is already registered")]
    ContactTaken { contact: String },

    #[error("An account with that handle or contact address already exists")]
    ConflictingAccount,

    #[error("Bootstrap is unavailable: an administrator already exists")]
    BootstrapClosed,

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Credential hashing failed: {source}")]
    Hasher {
        #[from]
        source: HasherError,
    },

    /// Store-level failure (timeout, busy database, connection loss).
    /// Safe to retry at the caller's discretion.
    #[error("Store failure: {source}")]
    Store {
        #[from]
        source: DbError,
    },
}

impl From<hearth_core::CoreError> for AdmissionError {
    fn from(source: hearth_core::CoreError) -> Self {
        Self::InvalidInput {
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdmissionError>;
