#![allow(dead_code, unused_imports)]

pub mod fakes;

pub use fakes::{FailingHasher, FakeHasher, RecordingNotifier};

use hearth_admission::AdmissionEngine;
use hearth_core::Account;
use hearth_db::AccountRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// In-memory pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    hearth_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Engine over an in-memory store with deterministic fakes. Returns the
/// notifier handle so tests can inspect deliveries.
pub async fn create_test_engine() -> (SqlitePool, AdmissionEngine, Arc<RecordingNotifier>) {
    let pool = create_test_pool().await;
    let notifier = Arc::new(RecordingNotifier::succeeding());
    let engine = AdmissionEngine::new(pool.clone(), Arc::new(FakeHasher), notifier.clone());
    (pool, engine, notifier)
}

/// Inserts an admin account directly, bypassing the engine
pub async fn seed_admin(pool: &SqlitePool, handle: &str) -> Account {
    let admin = Account::new_admin(
        handle,
        &format!("{handle}@example.com"),
        "seed-digest".to_string(),
        None,
    )
    .expect("valid seed admin");

    AccountRepository::new(pool.clone())
        .insert(&admin)
        .await
        .expect("Failed to seed admin");
    admin
}

/// Inserts a regular member account directly
pub async fn seed_member(pool: &SqlitePool, handle: &str) -> Account {
    let member = Account::new(
        handle,
        &format!("{handle}@example.com"),
        "seed-digest".to_string(),
        None,
    )
    .expect("valid seed member");

    AccountRepository::new(pool.clone())
        .insert(&member)
        .await
        .expect("Failed to seed member");
    member
}
