pub mod engine;
pub mod error;
pub mod hasher;
pub mod notifier;
pub mod token;

pub use engine::{AdmissionEngine, IssuedInvite, RedemptionRequest};
pub use error::{AdmissionError, Result};
pub use hasher::{Argon2Hasher, CredentialHasher, HasherError};
pub use notifier::{InviteNotifier, LogNotifier};
