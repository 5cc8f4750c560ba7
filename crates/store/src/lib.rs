//! `stockbook-store` — schema & data-access layer.
//!
//! Owns the SQLite store lifecycle (open, schema creation, seed) and exposes
//! a narrow set of typed operations per entity. One process-wide [`Store`]
//! handle is shared by every consumer; forms never open their own
//! connections.
//!
//! Failure contract: constraint violations and backend failures come back as
//! typed [`StoreError`] values, absence on point lookups is `Ok(None)`, and
//! any single failed operation leaves the pool usable for the next one.

pub mod db;
pub mod error;
pub mod party;
pub mod product;
pub mod transaction;
pub mod user;

pub use db::Store;
pub use error::{StoreError, StoreResult};
pub use party::{CustomerRecord, NewParty, SupplierRecord};
pub use product::{NewProduct, ProductRecord};
pub use transaction::{GoodsReceiptRecord, NewGoodsReceipt, NewSale, SaleRecord};
pub use user::UserRecord;
