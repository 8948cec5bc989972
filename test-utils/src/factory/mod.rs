//! Factory methods for creating test data.
//!
//! Factories insert entities into the database with sensible defaults so tests only
//! spell out the fields they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let bill = factory::bill::create_bill(&db).await?;
//!
//! // Customize through the builder
//! let paid = factory::bill::BillFactory::new(&db)
//!     .amount(dec!(100.00))
//!     .paid_on(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
//!     .build()
//!     .await?;
//! ```

pub mod bill;
pub mod helpers;

pub use bill::create_bill;
