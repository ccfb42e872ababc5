//! The admission engine: invite issuance, redemption, promotion,
//! bootstrap, rename, and the account listing.
//!
//! Every state-mutating operation is a transactional unit of work against
//! the shared store. None of the invariants here rest on in-process
//! locking: uniqueness of handles, contacts, and codes is carried by the
//! schema's UNIQUE indexes, and the single unused-to-used transition of a
//! code is a conditional update that exactly one of two racing redemptions
//! can win. The loser is reported `CodeAlreadyUsed`, never retried into a
//! different outcome.

use crate::error::{AdmissionError, Result};
use crate::hasher::CredentialHasher;
use crate::notifier::InviteNotifier;
use crate::token;

use hearth_core::{
    Account, AccountProfile, AccountSummary, DEFAULT_VALIDITY_DAYS, InviteCode, validate_contact,
    validate_handle,
};
use hearth_db::{AccountRepository, DbError, InviteRepository};

use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A freshly issued invite. The plaintext code inside is shown to the
/// issuer exactly once. `notified` is None when the code had no bound
/// contact, Some(false) when delivery failed — the code stays valid and
/// must then be relayed manually.
#[derive(Debug)]
pub struct IssuedInvite {
    pub invite: InviteCode,
    pub notified: Option<bool>,
}

/// One invite code exchanged for one new member account.
#[derive(Debug, Clone)]
pub struct RedemptionRequest {
    pub code: String,
    pub handle: String,
    pub contact: String,
    pub password: String,
    pub display_name: Option<String>,
}

#[derive(Clone)]
pub struct AdmissionEngine {
    pool: SqlitePool,
    accounts: AccountRepository,
    invites: InviteRepository,
    hasher: Arc<dyn CredentialHasher>,
    notifier: Arc<dyn InviteNotifier>,
    validity: Duration,
}

impl AdmissionEngine {
    pub fn new(
        pool: SqlitePool,
        hasher: Arc<dyn CredentialHasher>,
        notifier: Arc<dyn InviteNotifier>,
    ) -> Self {
        Self::with_validity(pool, hasher, notifier, Duration::days(DEFAULT_VALIDITY_DAYS))
    }

    pub fn with_validity(
        pool: SqlitePool,
        hasher: Arc<dyn CredentialHasher>,
        notifier: Arc<dyn InviteNotifier>,
        validity: Duration,
    ) -> Self {
        Self {
            accounts: AccountRepository::new(pool.clone()),
            invites: InviteRepository::new(pool.clone()),
            pool,
            hasher,
            notifier,
            validity,
        }
    }

    /// Issue a new single-use invite code. The issuer must be an active
    /// administrator. When a bound contact is given, delivery is attempted
    /// after the code is persisted; a delivery failure leaves the code
    /// valid and is surfaced only through `IssuedInvite::notified`.
    pub async fn issue_invite(
        &self,
        issuer_id: Uuid,
        bound_contact: Option<&str>,
    ) -> Result<IssuedInvite> {
        let issuer = self.require_admin(issuer_id).await?;

        if let Some(contact) = bound_contact {
            validate_contact(contact)?;
        }

        let invite = InviteCode::new(
            token::generate(),
            issuer.id,
            bound_contact.map(str::to_string),
            self.validity,
        );
        self.invites.insert(&invite).await?;
        info!("Invite {} issued by '{}'", invite.id, issuer.handle);

        // Delivery runs strictly after the insert committed and never
        // rolls it back.
        let notified = match &invite.bound_contact {
            Some(contact) => {
                let sent = self.notifier.notify(contact, &invite.code).await;
                if !sent {
                    warn!("Invite {} could not be delivered to {}", invite.id, contact);
                }
                Some(sent)
            }
            None => None,
        };

        Ok(IssuedInvite { invite, notified })
    }

    /// Redeem an invite code, creating a member account. Validation order:
    /// InvalidCode, CodeExpired, CodeAlreadyUsed, ContactMismatch,
    /// HandleTaken, ContactTaken. The account insert and the code's
    /// used-transition commit together or not at all.
    pub async fn redeem_invite(&self, request: &RedemptionRequest) -> Result<AccountProfile> {
        let invite = self
            .invites
            .find_by_code(&request.code)
            .await?
            .ok_or(AdmissionError::InvalidCode)?;

        let now = Utc::now();
        if invite.is_expired(now) {
            return Err(AdmissionError::CodeExpired);
        }
        if invite.is_used() {
            return Err(AdmissionError::CodeAlreadyUsed);
        }
        if let Some(bound) = &invite.bound_contact {
            // Strict binding: a mismatched contact is rejected outright.
            if bound != &request.contact {
                return Err(AdmissionError::ContactMismatch);
            }
        }
        if self
            .accounts
            .find_by_handle(&request.handle)
            .await?
            .is_some()
        {
            return Err(AdmissionError::HandleTaken {
                handle: request.handle.clone(),
            });
        }
        if self
            .accounts
            .find_by_contact(&request.contact)
            .await?
            .is_some()
        {
            return Err(AdmissionError::ContactTaken {
                contact: request.contact.clone(),
            });
        }

        // Hash before the transaction opens so the write lock is not held
        // for the duration of the KDF.
        let digest = self.hasher.hash(&request.password)?;
        let account = Account::new(
            &request.handle,
            &request.contact,
            digest,
            request.display_name.clone(),
        )?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        AccountRepository::insert_tx(&mut tx, &account)
            .await
            .map_err(|e| map_account_conflict(e, &request.handle, &request.contact))?;
        let marked = InviteRepository::mark_used_tx(&mut tx, invite.id, account.id, now).await?;
        if !marked {
            // Lost the used-transition race; the open transaction rolls
            // back on drop and the winner's account stands alone.
            return Err(AdmissionError::CodeAlreadyUsed);
        }
        tx.commit().await.map_err(DbError::from)?;

        info!(
            "Invite {} redeemed by new account '{}'",
            invite.id, account.handle
        );
        Ok(AccountProfile::from(&account))
    }

    /// Elevate an existing account to administrator. Idempotent: promoting
    /// an admin again succeeds silently.
    pub async fn promote(&self, actor_id: Uuid, target_handle: &str) -> Result<()> {
        self.require_admin(actor_id).await?;

        let target = self
            .accounts
            .find_by_handle(target_handle)
            .await?
            .ok_or_else(|| AdmissionError::NotFound {
                handle: target_handle.to_string(),
            })?;

        self.accounts.set_admin(target.id, true).await?;
        info!("Account '{}' promoted to administrator", target.handle);
        Ok(())
    }

    /// Create the first administrator, bypassing the invite mechanism.
    /// Closed as soon as any admin exists; the count is recomputed inside
    /// the insert transaction so two racing bootstrap calls cannot both
    /// observe "no admin yet".
    pub async fn bootstrap_admin(
        &self,
        handle: &str,
        contact: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<AccountProfile> {
        let digest = self.hasher.hash(password)?;
        let account = Account::new_admin(handle, contact, digest, display_name)?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        if AccountRepository::count_admins_tx(&mut tx).await? > 0 {
            return Err(AdmissionError::BootstrapClosed);
        }
        AccountRepository::insert_tx(&mut tx, &account)
            .await
            .map_err(|e| {
                if e.unique_violation().is_some() {
                    AdmissionError::ConflictingAccount
                } else {
                    AdmissionError::Store { source: e }
                }
            })?;
        tx.commit().await.map_err(DbError::from)?;

        info!("Bootstrap administrator '{}' created", account.handle);
        Ok(AccountProfile::from(&account))
    }

    /// Change an account's handle. Check-and-set in a single statement;
    /// a racing rename to the same handle loses on the unique index.
    pub async fn rename_account(&self, current: &str, new: &str) -> Result<()> {
        validate_handle(new)?;

        if self.accounts.find_by_handle(new).await?.is_some() {
            return Err(AdmissionError::HandleTaken {
                handle: new.to_string(),
            });
        }

        let renamed = self.accounts.rename(current, new).await.map_err(|e| {
            if e.unique_violation().is_some() {
                AdmissionError::HandleTaken {
                    handle: new.to_string(),
                }
            } else {
                AdmissionError::Store { source: e }
            }
        })?;
        if !renamed {
            return Err(AdmissionError::NotFound {
                handle: current.to_string(),
            });
        }

        info!("Account '{current}' renamed to '{new}'");
        Ok(())
    }

    /// Read-only projection of all accounts (id, handle, contact, admin
    /// flag), oldest first.
    pub async fn list_accounts(&self) -> Result<Vec<AccountSummary>> {
        Ok(self.accounts.list_summaries().await?)
    }

    /// Audit listing of an issuer's codes with their use/expiry state.
    pub async fn list_invites(&self, issuer_id: Uuid) -> Result<Vec<InviteCode>> {
        self.require_admin(issuer_id).await?;
        Ok(self.invites.list_by_issuer(issuer_id).await?)
    }

    async fn require_admin(&self, actor_id: Uuid) -> Result<Account> {
        match self.accounts.find_by_id(actor_id).await? {
            Some(account) if account.is_admin && account.is_active => Ok(account),
            _ => Err(AdmissionError::Unauthorized),
        }
    }
}

/// Map a uniqueness failure from the racing-insert path onto the
/// conflicting field.
fn map_account_conflict(e: DbError, handle: &str, contact: &str) -> AdmissionError {
    match e.unique_violation() {
        Some(c) if c.contains("accounts.handle") => AdmissionError::HandleTaken {
            handle: handle.to_string(),
        },
        Some(c) if c.contains("accounts.contact") => AdmissionError::ContactTaken {
            contact: contact.to_string(),
        },
        _ => AdmissionError::Store { source: e },
    }
}
