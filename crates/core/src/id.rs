//! Strongly-typed row identifiers used across the domain.
//!
//! The store assigns surrogate keys via SQLite `INTEGER PRIMARY KEY
//! AUTOINCREMENT`, so every identifier is an `i64` newtype.

use serde::{Deserialize, Serialize};

macro_rules! impl_row_id {
    ($t:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(i64);

        impl $t {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_row_id!(UserId, "Identifier of a user (operator identity).");
impl_row_id!(ProductId, "Identifier of a product.");
impl_row_id!(SupplierId, "Identifier of a supplier.");
impl_row_id!(CustomerId, "Identifier of a customer.");
impl_row_id!(ReceiptId, "Identifier of a goods receipt (append-only).");
impl_row_id!(SaleId, "Identifier of a sale (append-only).");
