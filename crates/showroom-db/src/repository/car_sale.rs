//! # Car Sale Repository
//!
//! Listings, the make/model summary, and the sale workflow.
//!
//! ## Listing Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Listing Lifecycle                                 │
//! │                                                                         │
//! │  1. LIST                                                                │
//! │     └── add() → CarSales row { IsSold: FALSE, buyer/seller/date NULL }  │
//! │                                                                         │
//! │  2. SELL (one transaction)                                              │
//! │     ├── customer full name    → CustomerID   (missing? rollback)        │
//! │     ├── salesperson full name → Username     (missing? rollback)        │
//! │     └── UPDATE IsSold = TRUE, BuyerID, SalespersonID, SaleDate          │
//! │         (no row? rollback)                                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices cross the SQL boundary as integer cents: reads use
//! `ROUND(Price * 100)::BIGINT`, writes use `$n::BIGINT / 100.0`.

use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::customer::customer_id_by_full_name;
use crate::repository::salesperson::username_by_full_name;
use showroom_core::validation::{validate_new_car_sale, validate_sale_record, validate_search_query};
use showroom_core::{CarSaleListing, CarSaleSummary, NewCarSale, SaleRecord};

/// Column list shared by `find` and `get_by_id`.
const LISTING_SELECT: &str = r#"
    SELECT
        cs.CarSaleID                       AS car_sale_id,
        cs.MakeCode                        AS make,
        cs.ModelCode                       AS model,
        cs.BuiltYear                       AS built_year,
        cs.Odometer                        AS odometer,
        ROUND(cs.Price * 100)::BIGINT      AS price,
        cs.IsSold                          AS is_sold,
        cs.SaleDate                        AS sale_date,
        c.FirstName || ' ' || c.LastName   AS buyer,
        sp.FirstName || ' ' || sp.LastName AS salesperson
    FROM CarSales cs
    LEFT JOIN Customer c ON cs.BuyerID = c.CustomerID
    LEFT JOIN Salesperson sp ON cs.SalespersonID = sp.Username
"#;

/// Repository for car sale database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.car_sales();
///
/// let id = repo.add(&new_sale).await?;
/// repo.record_sale(&SaleRecord { car_sale_id: id, .. }).await?;
/// let hits = repo.find("corolla").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CarSaleRepository {
    pool: PgPool,
}

impl CarSaleRepository {
    /// Creates a new CarSaleRepository.
    pub fn new(pool: PgPool) -> Self {
        CarSaleRepository { pool }
    }

    /// Summarizes listings per make and model.
    ///
    /// ## Returns
    /// One row per (make, model), ordered by make then model. Totals are
    /// zero and the last purchase date is `None` when nothing was sold.
    pub async fn summary(&self) -> DbResult<Vec<CarSaleSummary>> {
        debug!("Building car sales summary");

        let rows = sqlx::query_as::<_, CarSaleSummary>(
            r#"
            SELECT
                cs.MakeCode                                                     AS make,
                cs.ModelCode                                                    AS model,
                COUNT(*) FILTER (WHERE cs.IsSold = FALSE)                       AS available_units,
                COUNT(*) FILTER (WHERE cs.IsSold = TRUE)                        AS sold_units,
                COALESCE(ROUND(SUM(cs.Price) * 100), 0)::BIGINT                 AS total_prices,
                COALESCE(ROUND(SUM(cs.Price) FILTER (WHERE cs.IsSold = TRUE) * 100), 0)::BIGINT
                                                                                AS sold_total_prices,
                MAX(cs.SaleDate)                                                AS last_purchase_at
            FROM CarSales cs
            GROUP BY cs.MakeCode, cs.ModelCode
            ORDER BY cs.MakeCode ASC, cs.ModelCode ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(groups = rows.len(), "Summary built");
        Ok(rows)
    }

    /// Searches listings by keyword.
    ///
    /// ## How It Works
    /// 1. Trims and lowercases the keyword, escaping `%`, `_` and `\`
    /// 2. Matches it as a substring of make, model, buyer full name and
    ///    salesperson full name
    /// 3. Orders by sale date, newest first, unsold listings last
    ///
    /// An empty keyword returns every listing.
    pub async fn find(&self, keyword: &str) -> DbResult<Vec<CarSaleListing>> {
        let keyword = validate_search_query(keyword)?;
        let pattern = like_pattern(&keyword);

        debug!(keyword = %keyword, "Searching car sales");

        let sql = format!(
            r#"
            {LISTING_SELECT}
            WHERE LOWER(cs.MakeCode) LIKE $1 ESCAPE '\'
               OR LOWER(cs.ModelCode) LIKE $1 ESCAPE '\'
               OR LOWER(COALESCE(c.FirstName || ' ' || c.LastName, '')) LIKE $1 ESCAPE '\'
               OR LOWER(COALESCE(sp.FirstName || ' ' || sp.LastName, '')) LIKE $1 ESCAPE '\'
            ORDER BY cs.SaleDate DESC NULLS LAST, cs.CarSaleID ASC
            "#
        );

        let rows = sqlx::query_as::<_, CarSaleListing>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Search returned listings");
        Ok(rows)
    }

    /// Gets one listing by ID.
    pub async fn get_by_id(&self, car_sale_id: i32) -> DbResult<Option<CarSaleListing>> {
        let sql = format!("{LISTING_SELECT} WHERE cs.CarSaleID = $1");

        let row = sqlx::query_as::<_, CarSaleListing>(&sql)
            .bind(car_sale_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Lists a new car for sale.
    ///
    /// ## Validation (before any SQL)
    /// - make and model present
    /// - built year between 1886 and next year
    /// - odometer not negative
    /// - price strictly positive
    ///
    /// ## Returns
    /// The new `CarSaleID`.
    pub async fn add(&self, sale: &NewCarSale) -> DbResult<i32> {
        if let Err(e) = validate_new_car_sale(sale, today()) {
            warn!(field = e.field(), error = %e, "Rejected new car sale");
            return Err(e.into());
        }

        debug!(make = %sale.make, model = %sale.model, "Inserting car sale");

        let mut tx = self.pool.begin().await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO CarSales (
                MakeCode, ModelCode, BuiltYear, Odometer, Price, IsSold
            ) VALUES (
                $1, $2, $3, $4, $5::BIGINT / 100.0, FALSE
            )
            RETURNING CarSaleID
            "#,
        )
        .bind(sale.make.trim())
        .bind(sale.model.trim())
        .bind(sale.built_year)
        .bind(sale.odometer)
        .bind(sale.price.cents())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(car_sale_id = id, price = %sale.price, "Car sale listed");
        Ok(id)
    }

    /// Records a sale against a buyer, salesperson and date.
    ///
    /// ## What This Does
    /// 1. Rejects a sale date after today
    /// 2. Resolves the customer's and salesperson's full names
    /// 3. Marks the listing sold with all three fields
    ///
    /// Every step runs in one transaction; any failure rolls it back.
    ///
    /// ## Errors
    /// * `DbError::Validation` - future sale date, blank names
    /// * `DbError::NotFound` - unknown customer, salesperson or CarSaleID
    pub async fn record_sale(&self, record: &SaleRecord) -> DbResult<()> {
        if let Err(e) = validate_sale_record(record, today()) {
            warn!(car_sale_id = record.car_sale_id, error = %e, "Rejected sale record");
            return Err(e.into());
        }

        let mut tx = self.pool.begin().await?;

        let Some(customer_id) = customer_id_by_full_name(&mut *tx, &record.customer).await? else {
            warn!(customer = %record.customer, "Customer does not exist");
            return Err(DbError::not_found("Customer", record.customer.trim()));
        };

        let Some(username) = username_by_full_name(&mut *tx, &record.salesperson).await? else {
            warn!(salesperson = %record.salesperson, "Salesperson does not exist");
            return Err(DbError::not_found("Salesperson", record.salesperson.trim()));
        };

        let result = sqlx::query(
            r#"
            UPDATE CarSales
            SET
                IsSold = TRUE,
                BuyerID = $1,
                SalespersonID = $2,
                SaleDate = $3
            WHERE CarSaleID = $4
            "#,
        )
        .bind(&customer_id)
        .bind(&username)
        .bind(record.sale_date)
        .bind(record.car_sale_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            warn!(car_sale_id = record.car_sale_id, "Car sale does not exist");
            return Err(DbError::not_found("CarSale", record.car_sale_id.to_string()));
        }

        tx.commit().await?;

        info!(
            car_sale_id = record.car_sale_id,
            customer_id = %customer_id,
            salesperson = %username,
            "Sale recorded"
        );
        Ok(())
    }

    /// Counts listings (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM CarSales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Today's date in the dealership's local time zone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Builds a case-insensitive substring LIKE pattern.
///
/// `\`, `%` and `_` in the keyword match literally.
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');

    for ch in keyword.to_lowercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }

    pattern.push('%');
    pattern
}

// =============================================================================
// Unit Tests
// =============================================================================
