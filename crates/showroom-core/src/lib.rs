//! # showroom-core: Domain Types for the Dealership Sales Tracker
//!
//! Pure types and rules with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Showroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │               ★ showroom-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                   │    │
//! │  │   │   types   │  │   money   │  │ validation│                   │    │
//! │  │   │  Listing  │  │   Money   │  │   rules   │                   │    │
//! │  │   │  Summary  │  │           │  │   checks  │                   │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘                   │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                  showroom-db (Database Layer)                   │    │
//! │  │           PostgreSQL queries, migrations, repositories          │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Row types (Salesperson, CarSaleListing, CarSaleSummary, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Validation error types
//! - [`validation`] - Business rule validation

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Year of the first production automobile. Earlier build years are rejected.
pub const FIRST_CAR_YEAR: i32 = 1886;

/// Maximum length of a make, model, first or last name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a search keyword.
pub const MAX_SEARCH_LEN: usize = 100;

/// Largest price the `NUMERIC(10,2)` column holds, in cents ($99,999,999.99).
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;
