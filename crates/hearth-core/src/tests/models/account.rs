use crate::{Account, AccountProfile, AccountSummary, validate_contact, validate_handle};

#[test]
fn test_account_new() {
    let account = Account::new(
        "newuser",
        "a@x.com",
        "digest".to_string(),
        Some("New User".to_string()),
    )
    .unwrap();

    assert_eq!(account.handle, "newuser");
    assert_eq!(account.contact, "a@x.com");
    assert_eq!(account.credential_digest, "digest");
    assert_eq!(account.display_name.as_deref(), Some("New User"));
    assert!(!account.is_admin);
    assert!(account.is_active);
}

#[test]
fn test_account_new_admin() {
    let account = Account::new_admin("root", "root@x.com", "digest".to_string(), None).unwrap();

    assert!(account.is_admin);
    assert!(account.is_active);
}

#[test]
fn test_account_new_rejects_bad_handle() {
    assert!(Account::new("", "a@x.com", "d".to_string(), None).is_err());
    assert!(Account::new("two words", "a@x.com", "d".to_string(), None).is_err());
}

#[test]
fn test_account_new_rejects_bad_contact() {
    assert!(Account::new("user", "not-an-address", "d".to_string(), None).is_err());
    assert!(Account::new("user", "@x.com", "d".to_string(), None).is_err());
    assert!(Account::new("user", "a@", "d".to_string(), None).is_err());
    assert!(Account::new("user", "a @x.com", "d".to_string(), None).is_err());
}

#[test]
fn test_validate_handle() {
    assert!(validate_handle("ok").is_ok());
    assert!(validate_handle("UPPER_and_lower.123").is_ok());
    assert!(validate_handle("").is_err());
    assert!(validate_handle("a b").is_err());
    assert!(validate_handle("tab\there").is_err());
}

#[test]
fn test_validate_contact() {
    assert!(validate_contact("a@x.com").is_ok());
    assert!(validate_contact("a@b").is_ok());
    assert!(validate_contact("ab").is_err());
    assert!(validate_contact("nope").is_err());
}

#[test]
fn test_dtos_omit_digest() {
    let account = Account::new("user", "u@x.com", "secret-digest".to_string(), None).unwrap();

    let profile = AccountProfile::from(&account);
    assert_eq!(profile.id, account.id);
    assert_eq!(profile.handle, account.handle);

    let summary = AccountSummary::from(&account);
    assert_eq!(summary.id, account.id);
    assert_eq!(summary.contact, account.contact);
    assert!(!summary.is_admin);

    let profile_json = serde_json::to_value(&profile);
    assert!(profile_json.is_ok());
}
