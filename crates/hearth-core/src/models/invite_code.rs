//! Invite code entity - a single-use, time-limited admission token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default validity window for a freshly issued code, in days.
pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

/// A single-use admission token. Transitions exactly once from unused to
/// used (`redeemer_id`/`used_at` set together) and is kept forever as an
/// audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteCode {
    pub id: Uuid,
    /// Opaque random token, unique across all codes ever issued
    pub code: String,
    /// When set, only this contact address may redeem the code
    pub bound_contact: Option<String>,
    /// Admin account that created the code
    pub issuer_id: Uuid,
    /// Account created by redeeming the code; None until redeemed
    pub redeemer_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl InviteCode {
    /// Create an unused code expiring `validity` from now.
    pub fn new(
        code: String,
        issuer_id: Uuid,
        bound_contact: Option<String>,
        validity: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code,
            bound_contact,
            issuer_id,
            redeemer_id: None,
            created_at: now,
            expires_at: now + validity,
            used_at: None,
        }
    }

    pub fn is_used(&self) -> bool {
        self.redeemer_id.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// A code is redeemable iff it is unused and not yet expired.
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        !self.is_used() && !self.is_expired(now)
    }
}
