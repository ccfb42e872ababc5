#![allow(dead_code)]

use hearth_admission::{CredentialHasher, HasherError, InviteNotifier};

use std::sync::Mutex;

use async_trait::async_trait;

/// Deterministic hasher: digests are the password behind a marker prefix.
pub struct FakeHasher;

impl CredentialHasher for FakeHasher {
    fn hash(&self, password: &str) -> Result<String, HasherError> {
        Ok(format!("fake${password}"))
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        digest == format!("fake${password}")
    }
}

/// Hasher that always fails, for the error-propagation path.
pub struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _password: &str) -> Result<String, HasherError> {
        Err(HasherError {
            message: "fake hasher failure".to_string(),
        })
    }

    fn verify(&self, _password: &str, _digest: &str) -> bool {
        false
    }
}

/// Notifier that records every delivery attempt and reports a fixed
/// success or failure.
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    succeed: bool,
}

impl RecordingNotifier {
    pub fn succeeding() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            succeed: true,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            succeed: false,
        }
    }

    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl InviteNotifier for RecordingNotifier {
    async fn notify(&self, contact: &str, code: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .push((contact.to_string(), code.to_string()));
        self.succeed
    }
}
