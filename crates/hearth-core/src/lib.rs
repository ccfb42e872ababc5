pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::account::{Account, validate_contact, validate_handle};
pub use models::account_dto::{AccountProfile, AccountSummary};
pub use models::invite_code::{DEFAULT_VALIDITY_DAYS, InviteCode};

#[cfg(test)]
mod tests;
