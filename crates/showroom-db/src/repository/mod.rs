//! # Repository Module
//!
//! Database repository implementations for the sales tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Caller                                                                 │
//! │       │                                                                 │
//! │       │  db.car_sales().record_sale(&record)                            │
//! │       ▼                                                                 │
//! │  CarSaleRepository                                                      │
//! │  ├── summary(&self)                                                     │
//! │  ├── find(&self, keyword)                                               │
//! │  ├── add(&self, new_sale)                                               │
//! │  └── record_sale(&self, record)                                         │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  PostgreSQL                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SalespersonRepository`](salesperson::SalespersonRepository) - Login and name lookups
//! - [`CustomerRepository`](customer::CustomerRepository) - Buyer lookups
//! - [`CarSaleRepository`](car_sale::CarSaleRepository) - Listings, summary, sales
//! - [`StatsRepository`](stats::StatsRepository) - Server-side aggregate functions

pub mod car_sale;
pub mod customer;
pub mod salesperson;
pub mod stats;
