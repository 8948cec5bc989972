//! Wire representations shared by the HTTP API and its tests.
//!
//! Field names follow the public JSON contract (`dataVencimento`, `valor`,
//! `descricao`, `situacao`, ...) while the Rust names stay in English.

pub mod api;
pub mod bill;
