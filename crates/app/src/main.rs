//! Direct-invocation self-check for the store layer.
//!
//! The interactive forms layer is a separate concern; this binary stands in
//! for its startup path: open (or create) `inventory.db` in the working
//! directory, run the idempotent schema/seed pass, and verify that the
//! default operator logins work.

use anyhow::Context;
use stockbook_core::derived_totals;
use stockbook_store::Store;
use stockbook_store::db::STORE_FILE;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let store = Store::open(STORE_FILE)
        .await
        .with_context(|| format!("cannot open store at {STORE_FILE}"))?;

    for (username, password) in [("operator1", "pass123"), ("operator2", "securepass")] {
        match store.verify_user(username, password).await? {
            Some(user) => {
                tracing::info!(%username, id = %user.id, role = %user.role, "login check passed")
            }
            None => tracing::error!(%username, "login check FAILED"),
        }
    }

    let products = store.all_products().await?;
    let suppliers = store.all_suppliers().await?;
    let customers = store.all_customers().await?;
    let receipts = store.goods_receipts().await?;
    let sales = store.sales().await?;
    tracing::info!(
        products = products.len(),
        suppliers = suppliers.len(),
        customers = customers.len(),
        receipts = receipts.len(),
        sales = sales.len(),
        "store contents"
    );

    // Spot-check the calculator the workflows share.
    let totals = derived_totals(10.0, 5.0, 10.0);
    tracing::info!(
        sub_total = totals.sub_total,
        tax_amount = totals.tax_amount,
        total_rate = totals.total_rate,
        "derived totals for 10 x 5.00 at 10% tax"
    );

    store.close().await;
    Ok(())
}
