#![allow(dead_code)]

use hearth_core::{Account, DEFAULT_VALIDITY_DAYS, InviteCode};

use chrono::Duration;
use uuid::Uuid;

/// Creates a test member account with a unique handle and contact
pub fn create_test_account(tag: &str) -> Account {
    Account::new(
        &format!("user-{tag}"),
        &format!("{tag}@example.com"),
        format!("digest-{tag}"),
        Some(format!("Test User {tag}")),
    )
    .expect("valid test account")
}

/// Creates a test administrator account
pub fn create_test_admin(tag: &str) -> Account {
    Account::new_admin(
        &format!("admin-{tag}"),
        &format!("admin-{tag}@example.com"),
        format!("digest-{tag}"),
        None,
    )
    .expect("valid test admin")
}

/// Creates an unused invite code owned by `issuer_id`
pub fn create_test_invite(issuer_id: Uuid, bound_contact: Option<&str>) -> InviteCode {
    InviteCode::new(
        format!("CODE-{}", Uuid::new_v4().simple()),
        issuer_id,
        bound_contact.map(str::to_string),
        Duration::days(DEFAULT_VALIDITY_DAYS),
    )
}
