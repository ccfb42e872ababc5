//! Outward-facing account projections. Neither carries the credential
//! digest.

use crate::models::account::Account;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full profile returned to the account owner after redemption or bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: Uuid,
    pub handle: String,
    pub contact: String,
    pub display_name: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            handle: account.handle.clone(),
            contact: account.contact.clone(),
            display_name: account.display_name.clone(),
            is_admin: account.is_admin,
            is_active: account.is_active,
            created_at: account.created_at,
        }
    }
}

/// Row shape of the account listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub handle: String,
    pub contact: String,
    pub is_admin: bool,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            handle: account.handle.clone(),
            contact: account.contact.clone(),
            is_admin: account.is_admin,
        }
    }
}
