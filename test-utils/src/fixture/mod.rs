//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! conversion tests and as default values for factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let bill = fixture::bill::entity();
//! ```

pub mod bill;

pub use bill::entity as bill_entity;
