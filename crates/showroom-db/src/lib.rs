//! # showroom-db: Database Layer for the Dealership Sales Tracker
//!
//! PostgreSQL access with sqlx: login, listing search and summary, new
//! listings, and recording sales.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Showroom Data Flow                               │
//! │                                                                         │
//! │  Caller (seed binary, application)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                   showroom-db (THIS CRATE)                      │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐    ┌─────────────────┐   ┌──────────────┐   │    │
//! │  │   │   Database    │    │  Repositories   │   │  Migrations  │   │    │
//! │  │   │   (pool.rs)   │◄───│  Salesperson    │   │  (embedded)  │   │    │
//! │  │   │   DbConfig    │    │  Customer       │   │ 001_schema   │   │    │
//! │  │   │  (config.rs)  │    │  CarSale, Stats │   │ 002_funcs    │   │    │
//! │  │   └───────────────┘    └─────────────────┘   └──────────────┘   │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use showroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let user = db.salespeople().check_login("jdoe", "secret").await?;
//! let summary = db.car_sales().summary().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, DbConfig};
pub use error::{DbError, DbResult};
pub use pool::Database;

pub use repository::car_sale::CarSaleRepository;
pub use repository::customer::CustomerRepository;
pub use repository::salesperson::SalespersonRepository;
pub use repository::stats::StatsRepository;
