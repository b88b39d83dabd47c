//! # Domain Types
//!
//! Row types shared by the repositories and their callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Read side (materialized from SELECTs)                                  │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │  Salesperson    │   │ CarSaleSummary  │   │ CarSaleListing  │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  username       │   │  make, model    │   │  car_sale_id    │        │
//! │  │  first_name     │   │  available/sold │   │  price, is_sold │        │
//! │  │  last_name      │   │  totals         │   │  buyer, seller  │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │                                                                         │
//! │  Write side (validated before INSERT / UPDATE)                          │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   NewCarSale    │   │   SaleRecord    │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sale State Invariant
//! A listing is either unsold (no buyer, no salesperson, no sale date) or
//! sold (all three present). [`CarSaleListing::is_consistent`] checks it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Placeholder shown for missing dates and names.
pub const NOT_AVAILABLE: &str = "N/A";

/// Date format used in every listing and summary (`31-12-2024`).
pub const SALE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Formats an optional sale date as `DD-MM-YYYY`, or `N/A`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use showroom_core::types::format_sale_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7);
/// assert_eq!(format_sale_date(date), "07-03-2024");
/// assert_eq!(format_sale_date(None), "N/A");
/// ```
pub fn format_sale_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(SALE_DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// =============================================================================
// Salesperson
// =============================================================================

/// An authenticated salesperson.
///
/// Returned by a successful login. The password never leaves the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Salesperson {
    /// Login name, stored with its original casing.
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Salesperson {
    /// `FirstName LastName`, the form used to record a sale.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Per make/model roll-up of the sales table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CarSaleSummary {
    pub make: String,
    pub model: String,

    /// Listings not yet sold.
    pub available_units: i64,

    /// Listings sold.
    pub sold_units: i64,

    /// Sum of every listing's price, sold or not.
    pub total_prices: Money,

    /// Sum of sold listings' prices.
    pub sold_total_prices: Money,

    /// Most recent sale date in the group.
    pub last_purchase_at: Option<NaiveDate>,
}

impl CarSaleSummary {
    /// Last purchase date as `DD-MM-YYYY`, or `N/A` if nothing sold.
    pub fn last_purchase_label(&self) -> String {
        format_sale_date(self.last_purchase_at)
    }
}

// =============================================================================
// Listing
// =============================================================================

/// One car sale row joined with buyer and salesperson names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CarSaleListing {
    pub car_sale_id: i32,
    pub make: String,
    pub model: String,
    pub built_year: i32,
    pub odometer: i32,
    pub price: Money,
    pub is_sold: bool,
    pub sale_date: Option<NaiveDate>,

    /// Buyer full name, if sold.
    pub buyer: Option<String>,

    /// Salesperson full name, if sold.
    pub salesperson: Option<String>,
}

impl CarSaleListing {
    /// `Yes` / `No`.
    pub fn is_sold_label(&self) -> &'static str {
        if self.is_sold {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn sale_date_label(&self) -> String {
        format_sale_date(self.sale_date)
    }

    pub fn buyer_label(&self) -> &str {
        self.buyer.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn salesperson_label(&self) -> &str {
        self.salesperson.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// True when the sold flag agrees with buyer, salesperson and date.
    pub fn is_consistent(&self) -> bool {
        let populated = [
            self.sale_date.is_some(),
            self.buyer.is_some(),
            self.salesperson.is_some(),
        ];

        if self.is_sold {
            populated.iter().all(|p| *p)
        } else {
            populated.iter().all(|p| !*p)
        }
    }
}

// =============================================================================
// Write Models
// =============================================================================

/// A car being listed for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCarSale {
    pub make: String,
    pub model: String,
    pub built_year: i32,
    pub odometer: i32,
    pub price: Money,
}

/// Marks a listing as sold.
///
/// Customer and salesperson are given by full name (`FirstName LastName`)
/// and resolved to their keys inside the update transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub car_sale_id: i32,
    pub customer: String,
    pub salesperson: String,
    pub sale_date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(is_sold: bool) -> CarSaleListing {
        CarSaleListing {
            car_sale_id: 7,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            built_year: 2019,
            odometer: 42_000,
            price: Money::from_dollars(18_500),
            is_sold,
            sale_date: None,
            buyer: None,
            salesperson: None,
        }
    }

    #[test]
    fn test_unsold_listing_labels() {
        let l = listing(false);
        assert_eq!(l.is_sold_label(), "No");
        assert_eq!(l.sale_date_label(), "N/A");
        assert_eq!(l.buyer_label(), "N/A");
        assert_eq!(l.salesperson_label(), "N/A");
        assert!(l.is_consistent());
    }

    #[test]
    fn test_sold_listing_labels() {
        let mut l = listing(true);
        l.sale_date = NaiveDate::from_ymd_opt(2024, 11, 30);
        l.buyer = Some("Ada Lovelace".to_string());
        l.salesperson = Some("Grace Hopper".to_string());

        assert_eq!(l.is_sold_label(), "Yes");
        assert_eq!(l.sale_date_label(), "30-11-2024");
        assert_eq!(l.buyer_label(), "Ada Lovelace");
        assert!(l.is_consistent());
    }

    #[test]
    fn test_half_sold_listing_is_inconsistent() {
        let mut l = listing(true);
        l.buyer = Some("Ada Lovelace".to_string());
        assert!(!l.is_consistent());

        let mut l = listing(false);
        l.sale_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(!l.is_consistent());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = CarSaleSummary {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            available_units: 2,
            sold_units: 1,
            total_prices: Money::from_dollars(60_000),
            sold_total_prices: Money::from_dollars(20_000),
            last_purchase_at: None,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["availableUnits"], 2);
        assert_eq!(json["soldTotalPrices"], 2_000_000);
        assert!(json["lastPurchaseAt"].is_null());
        assert_eq!(summary.last_purchase_label(), "N/A");
    }

    #[test]
    fn test_salesperson_full_name() {
        let sp = Salesperson {
            username: "jdoe".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        };
        assert_eq!(sp.full_name(), "John Doe");
    }
}
