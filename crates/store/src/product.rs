//! Product master CRUD.

use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use stockbook_core::ProductId;

use crate::db::Store;
use crate::error::{StoreResult, classify};

/// Fields supplied when creating or updating a product.
///
/// `barcode` and `image_path` are genuinely optional; the image path is a
/// plain filesystem reference whose file lifecycle belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub barcode: Option<String>,
    pub sku: String,
    pub category: String,
    pub subcategory: String,
    pub name: String,
    pub description: String,
    pub tax_percentage: f64,
    pub price: f64,
    pub default_unit: String,
    pub image_path: Option<String>,
}

/// A product row. Updates overwrite in place; there is no versioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub barcode: Option<String>,
    pub sku: String,
    pub category: String,
    pub subcategory: String,
    pub name: String,
    pub description: String,
    pub tax_percentage: f64,
    pub price: f64,
    pub default_unit: String,
    pub image_path: Option<String>,
}

fn record_from_row(row: &SqliteRow) -> Result<ProductRecord, sqlx::Error> {
    Ok(ProductRecord {
        id: ProductId::new(row.try_get("id")?),
        barcode: row.try_get("barcode")?,
        sku: row.try_get("sku_id")?,
        category: row.try_get("category")?,
        subcategory: row.try_get("subcategory")?,
        name: row.try_get("product_name")?,
        description: row.try_get("description")?,
        tax_percentage: row.try_get("tax_percentage")?,
        price: row.try_get("price")?,
        default_unit: row.try_get("default_unit")?,
        image_path: row.try_get("image_path")?,
    })
}

const PRODUCT_COLUMNS: &str = "id, barcode, sku_id, category, subcategory, product_name, \
     description, tax_percentage, price, default_unit, image_path";

impl Store {
    /// Insert a product.
    ///
    /// Sku/barcode uniqueness is the one business rule enforced at the store
    /// boundary; a violation comes back as [`StoreError::Duplicate`].
    ///
    /// [`StoreError::Duplicate`]: crate::StoreError::Duplicate
    pub async fn add_product(&self, product: &NewProduct) -> StoreResult<ProductId> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (
                barcode, sku_id, category, subcategory, product_name,
                description, tax_percentage, price, default_unit, image_path
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&product.barcode)
        .bind(&product.sku)
        .bind(&product.category)
        .bind(&product.subcategory)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.tax_percentage)
        .bind(product.price)
        .bind(&product.default_unit)
        .bind(&product.image_path)
        .execute(self.pool())
        .await
        .map_err(classify)?;

        let id = ProductId::new(result.last_insert_rowid());
        tracing::info!(sku = %product.sku, %id, "product added");
        Ok(id)
    }

    /// List all products.
    pub async fn all_products(&self) -> StoreResult<Vec<ProductRecord>> {
        let rows = sqlx::query(&format!("SELECT {PRODUCT_COLUMNS} FROM products"))
            .fetch_all(self.pool())
            .await
            .map_err(classify)?;

        rows.iter()
            .map(|row| record_from_row(row).map_err(classify))
            .collect()
    }

    /// Point lookup by id. Absence is `Ok(None)`.
    pub async fn product_by_id(&self, id: ProductId) -> StoreResult<Option<ProductRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id.as_i64())
        .fetch_optional(self.pool())
        .await
        .map_err(classify)?;

        row.as_ref()
            .map(|row| record_from_row(row).map_err(classify))
            .transpose()
    }

    /// Point lookup by sku. Absence is `Ok(None)`.
    pub async fn product_by_sku(&self, sku: &str) -> StoreResult<Option<ProductRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE sku_id = ?1"
        ))
        .bind(sku)
        .fetch_optional(self.pool())
        .await
        .map_err(classify)?;

        row.as_ref()
            .map(|row| record_from_row(row).map_err(classify))
            .transpose()
    }

    /// Overwrite a product in place.
    ///
    /// Returns `Ok(false)` when no row matched the id, so the caller can
    /// distinguish a vanished product from a real update.
    pub async fn update_product(&self, id: ProductId, product: &NewProduct) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                barcode = ?1, sku_id = ?2, category = ?3, subcategory = ?4,
                product_name = ?5, description = ?6, tax_percentage = ?7,
                price = ?8, default_unit = ?9, image_path = ?10
            WHERE id = ?11
            "#,
        )
        .bind(&product.barcode)
        .bind(&product.sku)
        .bind(&product.category)
        .bind(&product.subcategory)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.tax_percentage)
        .bind(product.price)
        .bind(&product.default_unit)
        .bind(&product.image_path)
        .bind(id.as_i64())
        .execute(self.pool())
        .await
        .map_err(classify)?;

        let touched = result.rows_affected() > 0;
        if touched {
            tracing::info!(%id, sku = %product.sku, "product updated");
        } else {
            tracing::warn!(%id, "update_product matched no row");
        }
        Ok(touched)
    }

    /// Delete a product. Returns `Ok(false)` when no row matched.
    pub async fn delete_product(&self, id: ProductId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.as_i64())
            .execute(self.pool())
            .await
            .map_err(classify)?;

        let touched = result.rows_affected() > 0;
        if touched {
            tracing::info!(%id, "product deleted");
        } else {
            tracing::warn!(%id, "delete_product matched no row");
        }
        Ok(touched)
    }
}
