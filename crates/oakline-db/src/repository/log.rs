//! # Audit Log Repository
//!
//! The append-only action journal. Every mutating ledger operation records
//! one entry here after its own transaction commits.
//!
//! Audit writes are best-effort: a failed log write is reported through
//! `tracing` and never rolls back or fails the business mutation it
//! describes. Entries are never updated or deleted.

use chrono::{Local, Timelike};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use oakline_core::{LogEntry, DEFAULT_OPERATOR};

/// Repository for audit log operations.
#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: SqlitePool,
}

impl LogRepository {
    /// Creates a new LogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LogRepository { pool }
    }

    /// Appends one entry with the current timestamp (second precision).
    ///
    /// ## Arguments
    /// * `action` - Short tag (`add_product`, `add_sale`, ...)
    /// * `details` - Free-text summary; may be empty
    /// * `user` - Operator name; `None` records the default operator
    pub async fn append(
        &self,
        action: &str,
        details: &str,
        user: Option<&str>,
    ) -> DbResult<LogEntry> {
        let now = Local::now().naive_local();
        let ts = now.with_nanosecond(0).unwrap_or(now);
        let user = user.unwrap_or(DEFAULT_OPERATOR);

        debug!(action = %action, user = %user, "Appending audit log entry");

        let result = sqlx::query(
            r#"
            INSERT INTO logs (ts, user, action, details)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(ts)
        .bind(user)
        .bind(action)
        .bind(details)
        .execute(&self.pool)
        .await?;

        Ok(LogEntry {
            id: result.last_insert_rowid(),
            ts,
            user: Some(user.to_string()),
            action: action.to_string(),
            details: Some(details.to_string()),
        })
    }

    /// Lists the most recent entries, newest first (by id descending).
    ///
    /// The id order is the chronological order; the journal tab shows the
    /// latest `limit` entries (200 by default).
    pub async fn list(&self, limit: u32) -> DbResult<Vec<LogEntry>> {
        let entries = sqlx::query_as::<_, LogEntry>(
            r#"
            SELECT id, ts, user, action, details
            FROM logs
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Counts all entries (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM logs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Best-effort audit write used by the mutating repositories.
///
/// Runs after the caller's transaction has committed; on failure the error
/// is logged and swallowed so the committed mutation stands.
pub(crate) async fn record(pool: &SqlitePool, action: &str, details: String) {
    let repo = LogRepository::new(pool.clone());

    if let Err(err) = repo.append(action, &details, None).await {
        warn!(action = %action, error = %err, "Audit log write failed");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
