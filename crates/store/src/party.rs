//! Suppliers and customers (create/list only).
//!
//! Both parties share one shape; no uniqueness rule applies and no
//! update/delete operations exist for either.

use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use stockbook_core::{CustomerId, SupplierId};

use crate::db::Store;
use crate::error::{StoreResult, classify};

/// Fields supplied when creating a supplier or customer. Contact fields may
/// be empty strings; forms routinely leave them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParty {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl NewParty {
    /// A party with only a name filled in.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
        }
    }
}

/// A supplier row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub id: SupplierId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

fn party_fields(row: &SqliteRow, name_column: &str) -> Result<(i64, [String; 5]), sqlx::Error> {
    Ok((
        row.try_get("id")?,
        [
            row.try_get(name_column)?,
            row.try_get("contact_person")?,
            row.try_get("phone")?,
            row.try_get("email")?,
            row.try_get("address")?,
        ],
    ))
}

impl Store {
    /// Insert a supplier.
    pub async fn add_supplier(&self, party: &NewParty) -> StoreResult<SupplierId> {
        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (supplier_name, contact_person, phone, email, address)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&party.name)
        .bind(&party.contact_person)
        .bind(&party.phone)
        .bind(&party.email)
        .bind(&party.address)
        .execute(self.pool())
        .await
        .map_err(classify)?;

        let id = SupplierId::new(result.last_insert_rowid());
        tracing::info!(name = %party.name, %id, "supplier added");
        Ok(id)
    }

    /// List all suppliers.
    pub async fn all_suppliers(&self) -> StoreResult<Vec<SupplierRecord>> {
        let rows = sqlx::query(
            "SELECT id, supplier_name, contact_person, phone, email, address FROM suppliers",
        )
        .fetch_all(self.pool())
        .await
        .map_err(classify)?;

        rows.iter()
            .map(|row| {
                let (id, [name, contact_person, phone, email, address]) =
                    party_fields(row, "supplier_name").map_err(classify)?;
                Ok(SupplierRecord {
                    id: SupplierId::new(id),
                    name,
                    contact_person,
                    phone,
                    email,
                    address,
                })
            })
            .collect()
    }

    /// Insert a customer.
    pub async fn add_customer(&self, party: &NewParty) -> StoreResult<CustomerId> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (customer_name, contact_person, phone, email, address)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&party.name)
        .bind(&party.contact_person)
        .bind(&party.phone)
        .bind(&party.email)
        .bind(&party.address)
        .execute(self.pool())
        .await
        .map_err(classify)?;

        let id = CustomerId::new(result.last_insert_rowid());
        tracing::info!(name = %party.name, %id, "customer added");
        Ok(id)
    }

    /// List all customers.
    pub async fn all_customers(&self) -> StoreResult<Vec<CustomerRecord>> {
        let rows = sqlx::query(
            "SELECT id, customer_name, contact_person, phone, email, address FROM customers",
        )
        .fetch_all(self.pool())
        .await
        .map_err(classify)?;

        rows.iter()
            .map(|row| {
                let (id, [name, contact_person, phone, email, address]) =
                    party_fields(row, "customer_name").map_err(classify)?;
                Ok(CustomerRecord {
                    id: CustomerId::new(id),
                    name,
                    contact_person,
                    phone,
                    email,
                    address,
                })
            })
            .collect()
    }
}
