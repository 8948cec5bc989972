//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Default status on creation and payment date stamping
//! - **Error Translation**: Turning missing records into `AppError::NotFound`
//! - **Transaction Management**: Importing a whole CSV file in one transaction

pub mod bill;
pub mod import;
