//! # Database Error Types
//!
//! Error types for ledger operations.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                         │
//! │                                                              │
//! │  SQLite Error (sqlx::Error)                                  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  DbError (this module) ← adds context and categorization     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  LedgerError ← unions store failures with CoreError          │
//! │       │          business rule violations                    │
//! │       ▼                                                      │
//! │  Form UI displays the message; the operation is over         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure reads can only fail at the store level and return [`DbResult`].
//! Mutating ledger operations can also violate business rules and return
//! [`LedgerResult`].

use thiserror::Error;

use oakline_core::CoreError;

// =============================================================================
// Store-Level Errors
// =============================================================================

/// Database operation errors.
///
/// These wrap sqlx errors and classify the SQLite constraint failures the
/// schema can produce.
#[derive(Debug, Error)]
pub enum DbError {
    /// CHECK or NOT NULL constraint rejected a row.
    ///
    /// The schema backstops the invariants (`base_price >= 0`,
    /// `stock_qty >= 0`, `quantity > 0`, `sale_price >= 0`), so a row that
    /// slips past application checks still cannot be stored.
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → classify by constraint message
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // "CHECK constraint failed: <table>"
                // "NOT NULL constraint failed: <table>.<column>"
                // "FOREIGN KEY constraint failed"
                if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else if msg.contains("constraint failed") {
                    DbError::ConstraintViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for store-only operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Operation-Level Errors
// =============================================================================

/// Error type returned by ledger operations that enforce business rules.
///
/// `Domain` variants are expected, recoverable conditions shown to the
/// operator; `Store` variants are unexpected store failures that abort the
/// current operation only.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DbError),

    /// A CSV export could not be written.
    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        LedgerError::Store(DbError::from(err))
    }
}

impl From<oakline_core::ValidationError> for LedgerError {
    fn from(err: oakline_core::ValidationError) -> Self {
        LedgerError::Domain(CoreError::Validation(err))
    }
}

impl LedgerError {
    /// True for business rule violations the operator can correct and
    /// resubmit.
    pub fn is_domain(&self) -> bool {
        matches!(self, LedgerError::Domain(_))
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_classification() {
        let err = LedgerError::Domain(CoreError::ProductNotFound(9));
        assert!(err.is_domain());

        let err = LedgerError::Store(DbError::PoolExhausted);
        assert!(!err.is_domain());
    }

    #[test]
    fn test_validation_error_converts() {
        let err: LedgerError = oakline_core::ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(err.is_domain());
    }
}
