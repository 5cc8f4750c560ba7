//! Operator lookup and credential verification.

use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use stockbook_core::UserId;

use crate::db::Store;
use crate::error::{StoreResult, classify};

/// An operator account as exposed to consumers.
///
/// The stored password hash never leaves this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub role: String,
}

fn record_from_row(row: &SqliteRow) -> Result<UserRecord, sqlx::Error> {
    Ok(UserRecord {
        id: UserId::new(row.try_get("id")?),
        username: row.try_get("username")?,
        role: row.try_get("role")?,
    })
}

impl Store {
    /// Verify an operator login.
    ///
    /// `Ok(None)` for an unknown username or a mismatched password; the two
    /// cases are indistinguishable to the caller. No lockout, no rate
    /// limiting.
    pub async fn verify_user(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<UserRecord>> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, role FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(self.pool())
        .await
        .map_err(classify)?;

        let Some(row) = row else {
            tracing::debug!(%username, "login attempt for unknown username");
            return Ok(None);
        };

        let stored_hash: String = row.try_get("password_hash").map_err(classify)?;
        if !stockbook_auth::verify_password(password, &stored_hash)? {
            tracing::debug!(%username, "login attempt with wrong password");
            return Ok(None);
        }

        let record = record_from_row(&row).map_err(classify)?;
        tracing::info!(%username, id = %record.id, "operator verified");
        Ok(Some(record))
    }
}
