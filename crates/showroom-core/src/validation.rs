//! # Validation Module
//!
//! Input validation for writes to the sales table.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (Rust, before any SQL)                            │
//! │  ├── price > 0, odometer >= 0                                           │
//! │  ├── built year and sale date not in the future                         │
//! │  └── names present and bounded                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (PostgreSQL)                                         │
//! │  ├── NOT NULL / CHECK constraints                                       │
//! │  ├── sold-state CHECK (buyer, salesperson, date together)               │
//! │  └── Foreign key constraints                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Date checks take `today` as a parameter so callers decide the clock.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use showroom_core::validation::{validate_odometer, validate_sale_date};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! assert!(validate_odometer(0).is_ok());
//! assert!(validate_sale_date(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(), today).is_err());
//! ```

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewCarSale, SaleRecord};
use crate::{FIRST_CAR_YEAR, MAX_NAME_LEN, MAX_PRICE_CENTS, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a make code (e.g. `Toyota`).
pub fn validate_make(make: &str) -> ValidationResult<()> {
    validate_text("make", make, MAX_NAME_LEN)
}

/// Validates a model code (e.g. `Corolla`).
pub fn validate_model(model: &str) -> ValidationResult<()> {
    validate_text("model", model, MAX_NAME_LEN)
}

/// Validates a `FirstName LastName` lookup string.
pub fn validate_full_name(field: &str, name: &str) -> ValidationResult<()> {
    validate_text(field, name, MAX_NAME_LEN * 2 + 1)
}

/// Validates a search keyword.
///
/// ## Rules
/// - Can be empty (matches every listing)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed keyword.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an asking price.
///
/// ## Rules
/// - Must be strictly positive; a zero-priced car is a data entry error
/// - Must fit the price column (at most $99,999,999.99)
///
/// ## Example
/// ```rust
/// use showroom_core::money::Money;
/// use showroom_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_dollars(9_999)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an odometer reading. Zero is allowed (new car).
pub fn validate_odometer(odometer: i32) -> ValidationResult<()> {
    if odometer < 0 {
        return Err(ValidationError::Negative {
            field: "odometer".to_string(),
        });
    }

    Ok(())
}

/// Validates a build year.
///
/// ## Rules
/// - Not before 1886
/// - Not after next calendar year (next year's models ship early)
pub fn validate_built_year(year: i32, today: NaiveDate) -> ValidationResult<()> {
    let max = today.year() + 1;

    if year < FIRST_CAR_YEAR || year > max {
        return Err(ValidationError::OutOfRange {
            field: "built year".to_string(),
            min: FIRST_CAR_YEAR as i64,
            max: max as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a sale date: today or earlier.
pub fn validate_sale_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date > today {
        return Err(ValidationError::FutureDate {
            field: "sale date".to_string(),
            date,
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates every field of a new listing, first failure wins.
pub fn validate_new_car_sale(sale: &NewCarSale, today: NaiveDate) -> ValidationResult<()> {
    validate_make(&sale.make)?;
    validate_model(&sale.model)?;
    validate_built_year(sale.built_year, today)?;
    validate_odometer(sale.odometer)?;
    validate_price(sale.price)?;
    Ok(())
}

/// Validates a sale record before the lookup-and-update transaction.
pub fn validate_sale_record(record: &SaleRecord, today: NaiveDate) -> ValidationResult<()> {
    validate_full_name("customer", &record.customer)?;
    validate_full_name("salesperson", &record.salesperson)?;
    validate_sale_date(record.sale_date, today)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
