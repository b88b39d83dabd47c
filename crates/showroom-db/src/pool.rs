//! # Database Handle
//!
//! Opens the PostgreSQL connection handle and hands out repositories.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Handle                         │
//! │                                                                         │
//! │  DbConfig::from_env() ← Host, credentials, timeouts                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Connect + run migrations                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.car_sales().find("civic").await                                     │
//! │       │                                                                 │
//! │       ├── acquire a connection                                          │
//! │       ├── execute statement(s)                                          │
//! │       ├── commit (writes) or drop → rollback                            │
//! │       └── connection released on every path                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::car_sale::CarSaleRepository;
use crate::repository::customer::CustomerRepository;
use crate::repository::salesperson::SalespersonRepository;
use crate::repository::stats::StatsRepository;

/// Main database handle providing repository access.
///
/// Cheap to clone; clones share the same underlying connections.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::from_env()?).await?;
///
/// if let Some(user) = db.salespeople().check_login("jdoe", "secret").await? {
///     let listings = db.car_sales().find("corolla").await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connects to PostgreSQL.
    ///
    /// ## What This Does
    /// 1. Builds connect options from the config
    /// 2. Opens the connection handle (eagerly, so bad credentials fail here)
    /// 3. Runs migrations (if enabled)
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(target_db = %config.target(), "Initializing database connection");

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database connection established"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Wraps an existing pool (tests, embedding in a larger app).
    pub fn from_pool(pool: PgPool) -> Self {
        Database { pool }
    }

    /// Runs database migrations.
    ///
    /// Idempotent; already-applied migrations are skipped.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// For ad-hoc queries not covered by repositories.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the salesperson repository (login, name lookups).
    pub fn salespeople(&self) -> SalespersonRepository {
        SalespersonRepository::new(self.pool.clone())
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.pool.clone())
    }

    /// Returns the car sale repository.
    pub fn car_sales(&self) -> CarSaleRepository {
        CarSaleRepository::new(self.pool.clone())
    }

    /// Returns the server-side aggregate passthroughs.
    pub fn stats(&self) -> StatsRepository {
        StatsRepository::new(self.pool.clone())
    }

    /// Closes every connection.
    ///
    /// ## Note
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connections");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
