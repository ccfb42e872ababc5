use crate::{DEFAULT_VALIDITY_DAYS, InviteCode};

use chrono::{Duration, Utc};
use uuid::Uuid;

fn fresh_code() -> InviteCode {
    InviteCode::new(
        "ABC123XYZ9".to_string(),
        Uuid::new_v4(),
        None,
        Duration::days(DEFAULT_VALIDITY_DAYS),
    )
}

#[test]
fn test_invite_code_new() {
    let issuer = Uuid::new_v4();
    let invite = InviteCode::new(
        "ABC123".to_string(),
        issuer,
        Some("a@x.com".to_string()),
        Duration::days(30),
    );

    assert_eq!(invite.code, "ABC123");
    assert_eq!(invite.issuer_id, issuer);
    assert_eq!(invite.bound_contact.as_deref(), Some("a@x.com"));
    assert_eq!(invite.redeemer_id, None);
    assert_eq!(invite.used_at, None);
    assert_eq!(invite.expires_at, invite.created_at + Duration::days(30));
    assert!(!invite.is_used());
}

#[test]
fn test_fresh_code_is_redeemable() {
    let invite = fresh_code();
    assert!(invite.is_redeemable(Utc::now()));
}

#[test]
fn test_used_code_is_not_redeemable() {
    let mut invite = fresh_code();
    invite.redeemer_id = Some(Uuid::new_v4());
    invite.used_at = Some(Utc::now());

    assert!(invite.is_used());
    assert!(!invite.is_redeemable(Utc::now()));
}

#[test]
fn test_expired_code_is_not_redeemable() {
    let invite = fresh_code();
    let after_expiry = invite.created_at + Duration::days(31);

    assert!(invite.is_expired(after_expiry));
    assert!(!invite.is_redeemable(after_expiry));
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    // Redeemable strictly before expires_at; at the instant itself it is gone.
    let invite = fresh_code();

    assert!(invite.is_redeemable(invite.expires_at - Duration::seconds(1)));
    assert!(!invite.is_redeemable(invite.expires_at));
}

#[test]
fn test_expired_and_used_is_still_expired() {
    // Expiry is reported regardless of the used flag.
    let mut invite = fresh_code();
    invite.redeemer_id = Some(Uuid::new_v4());
    invite.used_at = Some(Utc::now());

    let after_expiry = invite.expires_at + Duration::days(1);
    assert!(invite.is_expired(after_expiry));
    assert!(!invite.is_redeemable(after_expiry));
}
