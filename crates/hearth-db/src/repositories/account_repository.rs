//! Account repository for CRUD operations on member accounts.
//!
//! Uniqueness of `handle` and `contact` is enforced by the schema's UNIQUE
//! indexes; a racing insert or rename loses with a `UniqueViolation` rather
//! than silently succeeding.

use crate::{DbError, Result as DbErrorResult};

use hearth_core::{Account, AccountSummary};

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_ACCOUNT: &str = r#"
    SELECT id, handle, contact, credential_digest, display_name,
        is_admin, is_active, created_at
    FROM accounts
"#;

#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, account: &Account) -> DbErrorResult<()> {
        insert_account(&self.pool, account).await
    }

    /// Insert inside a caller-owned transaction (redemption, bootstrap).
    pub async fn insert_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        account: &Account,
    ) -> DbErrorResult<()> {
        insert_account(&mut **tx, account).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>> {
        let id_str = id.to_string();

        let row = sqlx::query(&format!("{SELECT_ACCOUNT} WHERE id = ?"))
            .bind(id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn find_by_handle(&self, handle: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(&format!("{SELECT_ACCOUNT} WHERE handle = ?"))
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn find_by_contact(&self, contact: &str) -> DbErrorResult<Option<Account>> {
        let row = sqlx::query(&format!("{SELECT_ACCOUNT} WHERE contact = ?"))
            .bind(contact)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn count_admins(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE is_admin = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Admin count read inside a caller-owned transaction, so a bootstrap
    /// decision and its insert observe the same state.
    pub async fn count_admins_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    ) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE is_admin = 1")
            .fetch_one(&mut **tx)
            .await?;
        Ok(count)
    }

    /// Idempotent privilege update.
    pub async fn set_admin(&self, id: Uuid, is_admin: bool) -> DbErrorResult<()> {
        let id_str = id.to_string();

        sqlx::query("UPDATE accounts SET is_admin = ? WHERE id = ?")
            .bind(is_admin)
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Check-and-set handle change in a single statement; the UNIQUE index
    /// rejects a racing rename to the same handle. Returns false when no
    /// account has `current`.
    pub async fn rename(&self, current: &str, new: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE accounts SET handle = ? WHERE handle = ?")
            .bind(new)
            .bind(current)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_summaries(&self) -> DbErrorResult<Vec<AccountSummary>> {
        let rows = sqlx::query(
            r#"
                SELECT id, handle, contact, is_admin
                FROM accounts
                ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(AccountSummary {
                    id: parse_uuid(row.try_get("id")?, "accounts.id")?,
                    handle: row.try_get("handle")?,
                    contact: row.try_get("contact")?,
                    is_admin: row.try_get("is_admin")?,
                })
            })
            .collect()
    }
}

async fn insert_account<'e, E>(executor: E, account: &Account) -> DbErrorResult<()>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let id = account.id.to_string();
    let created_at = account.created_at.timestamp();

    sqlx::query(
        r#"
            INSERT INTO accounts (
                id, handle, contact, credential_digest, display_name,
                is_admin, is_active, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&account.handle)
    .bind(&account.contact)
    .bind(&account.credential_digest)
    .bind(&account.display_name)
    .bind(account.is_admin)
    .bind(account.is_active)
    .bind(created_at)
    .execute(executor)
    .await?;

    Ok(())
}

fn account_from_row(row: &SqliteRow) -> DbErrorResult<Account> {
    Ok(Account {
        id: parse_uuid(row.try_get("id")?, "accounts.id")?,
        handle: row.try_get("handle")?,
        contact: row.try_get("contact")?,
        credential_digest: row.try_get("credential_digest")?,
        display_name: row.try_get("display_name")?,
        is_admin: row.try_get("is_admin")?,
        is_active: row.try_get("is_active")?,
        created_at: DateTime::from_timestamp(row.try_get("created_at")?, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in accounts.created_at".to_string(),
            }
        })?,
    })
}

pub(crate) fn parse_uuid(value: String, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(&value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {column}: {e}"),
    })
}
