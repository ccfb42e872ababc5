//! Account entity - a member of the private site.

use crate::error::{CoreError, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An admitted member. Accounts are created by redeeming an invite code
/// (non-admin) or by the bootstrap path (first admin); they are never
/// hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Unique, case-sensitive login name
    pub handle: String,
    /// Unique email-like address
    pub contact: String,
    /// PHC-format hash; the clear password is never stored
    pub credential_digest: String,
    pub display_name: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a regular member account (non-admin, active).
    pub fn new(
        handle: &str,
        contact: &str,
        credential_digest: String,
        display_name: Option<String>,
    ) -> Result<Self> {
        validate_handle(handle)?;
        validate_contact(contact)?;
        Ok(Self {
            id: Uuid::new_v4(),
            handle: handle.to_string(),
            contact: contact.to_string(),
            credential_digest,
            display_name,
            is_admin: false,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    /// Create an administrator account directly (bootstrap path).
    pub fn new_admin(
        handle: &str,
        contact: &str,
        credential_digest: String,
        display_name: Option<String>,
    ) -> Result<Self> {
        let mut account = Self::new(handle, contact, credential_digest, display_name)?;
        account.is_admin = true;
        Ok(account)
    }
}

/// Handles must be non-empty and contain no whitespace. Comparison is
/// case-sensitive throughout.
pub fn validate_handle(handle: &str) -> Result<()> {
    if handle.is_empty() || handle.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation {
            message: format!("invalid handle: {handle:?}"),
        });
    }
    Ok(())
}

/// Pragmatic shape check; real address verification happens out of band.
pub fn validate_contact(contact: &str) -> Result<()> {
    let well_formed = contact.len() >= 3
        && contact.contains('@')
        && !contact.starts_with('@')
        && !contact.ends_with('@')
        && !contact.chars().any(char::is_whitespace);
    if !well_formed {
        return Err(CoreError::Validation {
            message: format!("invalid contact address: {contact:?}"),
        });
    }
    Ok(())
}
