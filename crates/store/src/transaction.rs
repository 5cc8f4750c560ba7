//! Append-only transaction rows: goods receipts and sales.
//!
//! Both shapes are structurally identical apart from the linked party. The
//! caller supplies `total_rate` and `tax_amount` precomputed by
//! [`stockbook_core::derived_totals`]; the store writes them verbatim and
//! never recomputes or validates them against its own calculation. Rows are
//! never updated or deleted once inserted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use stockbook_core::{CustomerId, ProductId, ReceiptId, SaleId, SupplierId, UserId};

use crate::db::Store;
use crate::error::{StoreResult, classify};

/// Fields for one stock receipt: product received from a supplier by an
/// operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoodsReceipt {
    pub receipt_date: NaiveDate,
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub quantity: f64,
    pub unit: String,
    pub rate_per_unit: f64,
    pub total_rate: f64,
    pub tax_amount: f64,
    pub operator_id: UserId,
}

/// A goods receipt row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsReceiptRecord {
    pub id: ReceiptId,
    pub receipt_date: NaiveDate,
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub quantity: f64,
    pub unit: String,
    pub rate_per_unit: f64,
    pub total_rate: f64,
    pub tax_amount: f64,
    pub operator_id: UserId,
}

/// Fields for one sale: product sold to a customer by an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub sale_date: NaiveDate,
    pub product_id: ProductId,
    pub customer_id: CustomerId,
    pub quantity: f64,
    pub unit: String,
    pub rate_per_unit: f64,
    pub total_rate: f64,
    pub tax_amount: f64,
    pub operator_id: UserId,
}

/// A sale row as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub sale_date: NaiveDate,
    pub product_id: ProductId,
    pub customer_id: CustomerId,
    pub quantity: f64,
    pub unit: String,
    pub rate_per_unit: f64,
    pub total_rate: f64,
    pub tax_amount: f64,
    pub operator_id: UserId,
}

fn receipt_from_row(row: &SqliteRow) -> Result<GoodsReceiptRecord, sqlx::Error> {
    Ok(GoodsReceiptRecord {
        id: ReceiptId::new(row.try_get("id")?),
        receipt_date: row.try_get("receipt_date")?,
        product_id: ProductId::new(row.try_get("product_id")?),
        supplier_id: SupplierId::new(row.try_get("supplier_id")?),
        quantity: row.try_get("quantity")?,
        unit: row.try_get("unit_of_measurement")?,
        rate_per_unit: row.try_get("rate_per_unit")?,
        total_rate: row.try_get("total_rate")?,
        tax_amount: row.try_get("tax_amount")?,
        operator_id: UserId::new(row.try_get("operator_id")?),
    })
}

fn sale_from_row(row: &SqliteRow) -> Result<SaleRecord, sqlx::Error> {
    Ok(SaleRecord {
        id: SaleId::new(row.try_get("id")?),
        sale_date: row.try_get("sale_date")?,
        product_id: ProductId::new(row.try_get("product_id")?),
        customer_id: CustomerId::new(row.try_get("customer_id")?),
        quantity: row.try_get("quantity")?,
        unit: row.try_get("unit_of_measurement")?,
        rate_per_unit: row.try_get("rate_per_unit")?,
        total_rate: row.try_get("total_rate")?,
        tax_amount: row.try_get("tax_amount")?,
        operator_id: UserId::new(row.try_get("operator_id")?),
    })
}

impl Store {
    /// Append a goods receipt.
    ///
    /// Fails with [`StoreError::ForeignKey`] if the product, supplier, or
    /// operator row does not exist.
    ///
    /// [`StoreError::ForeignKey`]: crate::StoreError::ForeignKey
    pub async fn add_goods_receipt(&self, receipt: &NewGoodsReceipt) -> StoreResult<ReceiptId> {
        let result = sqlx::query(
            r#"
            INSERT INTO goods_receipts (
                receipt_date, product_id, supplier_id, quantity,
                unit_of_measurement, rate_per_unit, total_rate, tax_amount,
                operator_id
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(receipt.receipt_date)
        .bind(receipt.product_id.as_i64())
        .bind(receipt.supplier_id.as_i64())
        .bind(receipt.quantity)
        .bind(&receipt.unit)
        .bind(receipt.rate_per_unit)
        .bind(receipt.total_rate)
        .bind(receipt.tax_amount)
        .bind(receipt.operator_id.as_i64())
        .execute(self.pool())
        .await
        .map_err(classify)?;

        let id = ReceiptId::new(result.last_insert_rowid());
        tracing::info!(
            %id,
            product_id = %receipt.product_id,
            supplier_id = %receipt.supplier_id,
            quantity = receipt.quantity,
            "goods receipt recorded"
        );
        Ok(id)
    }

    /// List all goods receipts.
    pub async fn goods_receipts(&self) -> StoreResult<Vec<GoodsReceiptRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, receipt_date, product_id, supplier_id, quantity,
                   unit_of_measurement, rate_per_unit, total_rate, tax_amount,
                   operator_id
            FROM goods_receipts
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(classify)?;

        rows.iter()
            .map(|row| receipt_from_row(row).map_err(classify))
            .collect()
    }

    /// Append a sale.
    ///
    /// Same contract as [`Store::add_goods_receipt`] with the customer in
    /// place of the supplier.
    pub async fn add_sale(&self, sale: &NewSale) -> StoreResult<SaleId> {
        let result = sqlx::query(
            r#"
            INSERT INTO sales (
                sale_date, product_id, customer_id, quantity,
                unit_of_measurement, rate_per_unit, total_rate, tax_amount,
                operator_id
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(sale.sale_date)
        .bind(sale.product_id.as_i64())
        .bind(sale.customer_id.as_i64())
        .bind(sale.quantity)
        .bind(&sale.unit)
        .bind(sale.rate_per_unit)
        .bind(sale.total_rate)
        .bind(sale.tax_amount)
        .bind(sale.operator_id.as_i64())
        .execute(self.pool())
        .await
        .map_err(classify)?;

        let id = SaleId::new(result.last_insert_rowid());
        tracing::info!(
            %id,
            product_id = %sale.product_id,
            customer_id = %sale.customer_id,
            quantity = sale.quantity,
            "sale recorded"
        );
        Ok(id)
    }

    /// List all sales.
    pub async fn sales(&self) -> StoreResult<Vec<SaleRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, sale_date, product_id, customer_id, quantity,
                   unit_of_measurement, rate_per_unit, total_rate, tax_amount,
                   operator_id
            FROM sales
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(classify)?;

        rows.iter()
            .map(|row| sale_from_row(row).map_err(classify))
            .collect()
    }
}
