//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod id;
pub mod totals;

pub use id::{CustomerId, ProductId, ReceiptId, SaleId, SupplierId, UserId};
pub use totals::{DerivedTotals, derived_totals};
