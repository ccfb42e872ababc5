//! Invite ledger repository.
//!
//! Rows transition exactly once from unused to used via `mark_used_tx`'s
//! conditional update, and are never deleted; expired and used codes stay
//! behind as the audit trail.

use crate::repositories::account_repository::parse_uuid;
use crate::{DbError, Result as DbErrorResult};

use hearth_core::InviteCode;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_INVITE: &str = r#"
    SELECT id, code, bound_contact, issuer_id, redeemer_id,
        created_at, expires_at, used_at
    FROM invite_codes
"#;

#[derive(Clone)]
pub struct InviteRepository {
    pool: SqlitePool,
}

impl InviteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, invite: &InviteCode) -> DbErrorResult<()> {
        let id = invite.id.to_string();
        let issuer_id = invite.issuer_id.to_string();
        let redeemer_id = invite.redeemer_id.map(|id| id.to_string());
        let created_at = invite.created_at.timestamp();
        let expires_at = invite.expires_at.timestamp();
        let used_at = invite.used_at.map(|dt| dt.timestamp());

        sqlx::query(
            r#"
                INSERT INTO invite_codes (
                    id, code, bound_contact, issuer_id, redeemer_id,
                    created_at, expires_at, used_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&invite.code)
        .bind(&invite.bound_contact)
        .bind(issuer_id)
        .bind(redeemer_id)
        .bind(created_at)
        .bind(expires_at)
        .bind(used_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_code(&self, code: &str) -> DbErrorResult<Option<InviteCode>> {
        let row = sqlx::query(&format!("{SELECT_INVITE} WHERE code = ?"))
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(invite_from_row).transpose()
    }

    /// The unused-to-used transition. Conditional on `used_at IS NULL`, so
    /// of two racing redemptions exactly one sees a row change; the other
    /// gets false and must report the code as already used.
    pub async fn mark_used_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        invite_id: Uuid,
        redeemer_id: Uuid,
        used_at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        let invite_id_str = invite_id.to_string();
        let redeemer_id_str = redeemer_id.to_string();
        let used_at_ts = used_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE invite_codes
                SET used_at = ?, redeemer_id = ?
                WHERE id = ? AND used_at IS NULL
            "#,
        )
        .bind(used_at_ts)
        .bind(redeemer_id_str)
        .bind(invite_id_str)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_issuer(&self, issuer_id: Uuid) -> DbErrorResult<Vec<InviteCode>> {
        let issuer_id_str = issuer_id.to_string();

        let rows = sqlx::query(&format!(
            "{SELECT_INVITE} WHERE issuer_id = ? ORDER BY created_at, id"
        ))
        .bind(issuer_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(invite_from_row).collect()
    }
}

fn invite_from_row(row: &SqliteRow) -> DbErrorResult<InviteCode> {
    let redeemer_id: Option<String> = row.try_get("redeemer_id")?;
    let used_at: Option<i64> = row.try_get("used_at")?;

    Ok(InviteCode {
        id: parse_uuid(row.try_get("id")?, "invite_codes.id")?,
        code: row.try_get("code")?,
        bound_contact: row.try_get("bound_contact")?,
        issuer_id: parse_uuid(row.try_get("issuer_id")?, "invite_codes.issuer_id")?,
        redeemer_id: redeemer_id
            .map(|id| parse_uuid(id, "invite_codes.redeemer_id"))
            .transpose()?,
        created_at: timestamp(row.try_get("created_at")?, "invite_codes.created_at")?,
        expires_at: timestamp(row.try_get("expires_at")?, "invite_codes.expires_at")?,
        used_at: used_at
            .map(|ts| timestamp(ts, "invite_codes.used_at"))
            .transpose()?,
    })
}

fn timestamp(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {column}"),
    })
}
