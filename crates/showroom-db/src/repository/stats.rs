//! # Stats Repository
//!
//! Thin passthroughs to the aggregate functions defined in
//! `002_aggregate_functions.sql`. The computation happens in PostgreSQL.

use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;
use showroom_core::Money;

#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        StatsRepository { pool }
    }

    /// Total price of cars sold by `username`. Zero for unknown users.
    pub async fn salesperson_revenue(&self, username: &str) -> DbResult<Money> {
        debug!(username = %username, "Calling sales_total_for_salesperson");

        let cents: i64 =
            sqlx::query_scalar("SELECT ROUND(sales_total_for_salesperson($1) * 100)::BIGINT")
                .bind(username.trim())
                .fetch_one(&self.pool)
                .await?;

        Ok(Money::from_cents(cents))
    }

    /// Number of unsold listings of `make`.
    pub async fn available_units(&self, make: &str) -> DbResult<i64> {
        debug!(make = %make, "Calling available_units_for_make");

        let units: i64 = sqlx::query_scalar("SELECT available_units_for_make($1)")
            .bind(make.trim())
            .fetch_one(&self.pool)
            .await?;

        Ok(units)
    }
}
