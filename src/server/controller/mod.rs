//! HTTP request handlers.
//!
//! Controllers extract and validate requests, convert DTOs to domain parameters, call
//! the service layer, and convert the resulting domain models back to DTOs.

pub mod bill;
