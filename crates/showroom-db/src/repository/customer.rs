//! # Customer Repository
//!
//! Buyers are referenced by `CustomerID`; callers know them by name.

use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use crate::error::DbResult;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        CustomerRepository { pool }
    }

    /// Resolves `FirstName LastName` to a customer ID.
    pub async fn find_id_by_full_name(&self, full_name: &str) -> DbResult<Option<String>> {
        customer_id_by_full_name(&self.pool, full_name).await
    }

    /// Inserts a customer.
    pub async fn insert(&self, customer_id: &str, first_name: &str, last_name: &str) -> DbResult<()> {
        debug!(customer_id = %customer_id, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO Customer (CustomerID, FirstName, LastName)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(customer_id)
        .bind(first_name)
        .bind(last_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Full-name lookup usable on the pool or inside a transaction.
pub(crate) async fn customer_id_by_full_name<'e, E>(
    executor: E,
    full_name: &str,
) -> DbResult<Option<String>>
where
    E: PgExecutor<'e>,
{
    let id: Option<String> = sqlx::query_scalar(
        r#"
        SELECT CustomerID
        FROM Customer
        WHERE TRIM(FirstName || ' ' || LastName) = $1
        ORDER BY CustomerID
        LIMIT 1
        "#,
    )
    .bind(full_name.trim())
    .fetch_optional(executor)
    .await?;

    Ok(id)
}
