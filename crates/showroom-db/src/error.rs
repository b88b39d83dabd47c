//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (showroom-core)   PostgreSQL error (sqlx::Error)       │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │  DbError (this module) ← Adds context and categorization                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: show message, retry, or abort                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use showroom_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL SQLSTATE for `check_violation`.
const SQLSTATE_CHECK_VIOLATION: &str = "23514";

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - Customer or salesperson full name doesn't resolve
    /// - CarSaleID doesn't exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// CHECK constraint violation (e.g. half-populated sold state).
    #[error("Check constraint {constraint} violated: {message}")]
    CheckViolation { constraint: String, message: String },

    /// Input rejected before reaching the database.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Connection settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Server unreachable
    /// - Authentication rejected
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

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the server.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            DbError::NotFound { .. }
                | DbError::Validation(_)
                | DbError::UniqueViolation { .. }
                | DbError::ForeignKeyViolation { .. }
                | DbError::CheckViolation { .. }
        )
    }
}

/// Maps a PostgreSQL SQLSTATE plus message to a DbError.
fn from_sqlstate(code: Option<&str>, constraint: Option<&str>, message: &str) -> DbError {
    let constraint = constraint.unwrap_or("unknown").to_string();

    match code {
        Some(SQLSTATE_UNIQUE_VIOLATION) => DbError::UniqueViolation {
            field: constraint,
            value: "unknown".to_string(),
        },
        Some(SQLSTATE_FOREIGN_KEY_VIOLATION) => DbError::ForeignKeyViolation {
            message: message.to_string(),
        },
        Some(SQLSTATE_CHECK_VIOLATION) => DbError::CheckViolation {
            constraint,
            message: message.to_string(),
        },
        _ => DbError::QueryFailed(message.to_string()),
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → SQLSTATE 23505 / 23503 / 23514, else QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::Io / Tls       → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                from_sqlstate(db_err.code().as_deref(), db_err.constraint(), db_err.message())
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::Tls(e) => DbError::ConnectionFailed(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
