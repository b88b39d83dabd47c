//! # Salesperson Repository
//!
//! Login checks and full-name lookups.
//!
//! ## Login Rules
//! - Username match is case-insensitive (`JDoe` logs in as `jdoe`)
//! - Password match is exact
//! - The login is compared as typed; surrounding spaces do not match
//! - Wrong credentials are not an error: the result is `None`

use sqlx::{PgExecutor, PgPool};
use tracing::{debug, info};

use crate::error::DbResult;
use showroom_core::Salesperson;

/// Repository for salesperson database operations.
#[derive(Debug, Clone)]
pub struct SalespersonRepository {
    pool: PgPool,
}

impl SalespersonRepository {
    /// Creates a new SalespersonRepository.
    pub fn new(pool: PgPool) -> Self {
        SalespersonRepository { pool }
    }

    /// Validates a salesperson's credentials.
    ///
    /// ## Returns
    /// * `Ok(Some(Salesperson))` - Credentials match; username in stored casing
    /// * `Ok(None)` - Unknown user, wrong password, or blank input
    pub async fn check_login(&self, login: &str, password: &str) -> DbResult<Option<Salesperson>> {
        if login.trim().is_empty() || password.is_empty() {
            debug!("Blank credentials, skipping lookup");
            return Ok(None);
        }

        let user = sqlx::query_as::<_, Salesperson>(
            r#"
            SELECT
                Username  AS username,
                FirstName AS first_name,
                LastName  AS last_name
            FROM Salesperson
            WHERE LOWER(Username) = LOWER($1)
              AND Password = $2
            "#,
        )
        .bind(login)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        match &user {
            Some(u) => info!(username = %u.username, "Login succeeded"),
            None => info!(login = %login, "Login rejected"),
        }

        Ok(user)
    }

    /// Resolves `FirstName LastName` to a username.
    pub async fn find_username_by_full_name(&self, full_name: &str) -> DbResult<Option<String>> {
        username_by_full_name(&self.pool, full_name).await
    }

    /// Inserts a salesperson (seed data, administration).
    pub async fn insert(
        &self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<()> {
        debug!(username = %username, "Inserting salesperson");

        sqlx::query(
            r#"
            INSERT INTO Salesperson (Username, Password, FirstName, LastName)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(username)
        .bind(password)
        .bind(first_name)
        .bind(last_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts salespeople (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Salesperson")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Full-name lookup usable on the pool or inside a transaction.
pub(crate) async fn username_by_full_name<'e, E>(
    executor: E,
    full_name: &str,
) -> DbResult<Option<String>>
where
    E: PgExecutor<'e>,
{
    let username: Option<String> = sqlx::query_scalar(
        r#"
        SELECT Username
        FROM Salesperson
        WHERE TRIM(FirstName || ' ' || LastName) = $1
        ORDER BY Username
        LIMIT 1
        "#,
    )
    .bind(full_name.trim())
    .fetch_optional(executor)
    .await?;

    Ok(username)
}
