//! # Database Migrations
//!
//! Embedded SQL migrations for the sales schema.
//!
//! ## Migration Files
//! ```text
//! migrations/postgres/
//! ├── 001_initial_schema.sql       # Salesperson, Customer, CarSales
//! └── 002_aggregate_functions.sql  # sales_total_for_salesperson, available_units_for_make
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/postgres/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::PgPool;
use tracing::info;

use crate::error::DbResult;

/// PostgreSQL SQLSTATE for `undefined_table`.
const SQLSTATE_UNDEFINED_TABLE: &str = "42P01";

/// Embedded migrations from the `migrations/postgres` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/postgres");

/// Runs all pending database migrations.
///
/// Each migration runs in its own transaction and is recorded in
/// `_sqlx_migrations`.
pub async fn run_migrations(pool: &PgPool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns (total_migrations, applied_migrations).
///
/// For diagnostics and health checks. A database that was never migrated
/// reports zero applied.
pub async fn migration_status(pool: &PgPool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(SQLSTATE_UNDEFINED_TABLE) => 0,
        Err(e) => return Err(e.into()),
    };

    Ok((total, applied as usize))
}
