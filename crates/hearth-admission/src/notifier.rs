//! Invite delivery capability.

use async_trait::async_trait;
use log::info;

/// Best-effort delivery of an invite code to a contact address. Returns
/// false on any transport or configuration failure; never errors and never
/// rolls back admission state.
#[async_trait]
pub trait InviteNotifier: Send + Sync {
    async fn notify(&self, contact: &str, code: &str) -> bool;
}

/// Stand-in used when no mail transport is configured: logs the delivery
/// so an operator can relay the code manually, and reports failure so the
/// caller knows nothing was sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl InviteNotifier for LogNotifier {
    async fn notify(&self, contact: &str, _code: &str) -> bool {
        info!("No mail transport configured; invite for {contact} must be relayed manually");
        false
    }
}
