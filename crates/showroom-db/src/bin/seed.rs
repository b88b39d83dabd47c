//! # Seed Data Loader
//!
//! Populates the database with a small demo dealership.
//!
//! ## Usage
//! ```bash
//! # Load demo data (skipped if listings already exist)
//! cargo run -p showroom-db --bin seed
//!
//! # Wipe sales tables first
//! cargo run -p showroom-db --bin seed -- --reset
//!
//! # Point at another database
//! SHOWROOM_DATABASE_URL=postgres://sales:secret@db/dealer cargo run -p showroom-db --bin seed
//! ```
//!
//! ## Generated Data
//! - 3 salespeople, 4 customers
//! - 10 listings across 4 makes, 4 of them sold
//!
//! The summary is printed to stdout as JSON when done.

use std::env;

use chrono::NaiveDate;
use showroom_core::{Money, NewCarSale, SaleRecord};
use showroom_db::{Database, DbConfig, DbResult};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// (username, password, first name, last name)
const SALESPEOPLE: &[(&str, &str, &str, &str)] = &[
    ("jdoe", "Pass1234", "John", "Doe"),
    ("bbrown", "Pass1234", "Bob", "Brown"),
    ("kwilliams", "Pass1234", "Karen", "Williams"),
];

/// (customer id, first name, last name)
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("c001", "David", "Wilson"),
    ("c002", "Emily", "Johnson"),
    ("c003", "Michael", "Smith"),
    ("c004", "Sarah", "Miller"),
];

/// (make, model, built year, odometer, price in dollars)
const LISTINGS: &[(&str, &str, i32, i32, i64)] = &[
    ("Toyota", "Corolla", 2019, 42_000, 18_500),
    ("Toyota", "Corolla", 2021, 15_500, 23_900),
    ("Toyota", "Camry", 2020, 30_200, 26_750),
    ("Honda", "Civic", 2018, 61_000, 16_200),
    ("Honda", "Civic", 2022, 8_900, 27_400),
    ("Honda", "Accord", 2017, 88_300, 14_990),
    ("Mazda", "CX-5", 2021, 31_000, 27_990),
    ("Mazda", "Mazda3", 2016, 97_450, 11_500),
    ("Ford", "Ranger", 2020, 54_700, 36_800),
    ("Ford", "Focus", 2015, 120_000, 7_900),
];

/// (listing index, customer, salesperson, sale date)
const SALES: &[(usize, &str, &str, (i32, u32, u32))] = &[
    (0, "David Wilson", "John Doe", (2024, 2, 14)),
    (3, "Emily Johnson", "Bob Brown", (2024, 5, 3)),
    (6, "Michael Smith", "John Doe", (2024, 8, 21)),
    (9, "Sarah Miller", "Karen Williams", (2023, 11, 30)),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let reset = env::args().skip(1).any(|arg| arg == "--reset");

    let config = DbConfig::from_env()?;
    let db = Database::new(config).await?;

    if reset {
        warn!("Resetting sales tables");
        sqlx::query("TRUNCATE CarSales, Customer, Salesperson RESTART IDENTITY CASCADE")
            .execute(db.pool())
            .await?;
    }

    let existing = db.car_sales().count().await?;
    if existing > 0 {
        info!(existing, "Database already has listings, skipping seed (use --reset)");
    } else {
        seed(&db).await?;
    }

    let summary = db.car_sales().summary().await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    db.close().await;
    Ok(())
}

async fn seed(db: &Database) -> DbResult<()> {
    for (username, password, first, last) in SALESPEOPLE {
        db.salespeople().insert(username, password, first, last).await?;
    }

    for (id, first, last) in CUSTOMERS {
        db.customers().insert(id, first, last).await?;
    }

    let mut ids = Vec::with_capacity(LISTINGS.len());
    for (make, model, built_year, odometer, dollars) in LISTINGS {
        let id = db
            .car_sales()
            .add(&NewCarSale {
                make: make.to_string(),
                model: model.to_string(),
                built_year: *built_year,
                odometer: *odometer,
                price: Money::from_dollars(*dollars),
            })
            .await?;
        ids.push(id);
    }

    for (index, customer, salesperson, (y, m, d)) in SALES {
        let Some(sale_date) = NaiveDate::from_ymd_opt(*y, *m, *d) else {
            warn!(year = y, month = m, day = d, "Skipping sale with invalid date");
            continue;
        };

        db.car_sales()
            .record_sale(&SaleRecord {
                car_sale_id: ids[*index],
                customer: customer.to_string(),
                salesperson: salesperson.to_string(),
                sale_date,
            })
            .await?;
    }

    info!(
        salespeople = SALESPEOPLE.len(),
        customers = CUSTOMERS.len(),
        listings = ids.len(),
        sales = SALES.len(),
        "Seed complete"
    );
    Ok(())
}
