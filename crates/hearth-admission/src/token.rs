//! Invite token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Token length. 62^16 is roughly 2^95 values, so random collisions are
/// not a practical concern; the UNIQUE index on `invite_codes.code` is the
/// backstop if one ever occurs.
pub const TOKEN_LEN: usize = 16;

/// Sample an invite token from the thread-local CSPRNG.
pub fn generate() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}
