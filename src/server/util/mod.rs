//! Request extraction and parsing helpers shared by controllers and services.

pub mod extract;
pub mod parse;
