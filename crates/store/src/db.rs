//! Store lifecycle: open/create, schema, default seed.

use std::path::Path;

use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{StoreError, StoreResult, classify};

/// Fixed on-disk file name for the store (no configuration surface for
/// alternate locations).
pub const STORE_FILE: &str = "inventory.db";

/// Default operator accounts seeded on first run.
///
/// Passwords are hashed at seed time; the plaintext here exists only so a
/// fresh install has working logins.
const DEFAULT_OPERATORS: &[(&str, &str)] = &[
    ("operator1", "pass123"),
    ("operator2", "securepass"),
];

/// Process-wide handle to the SQLite store.
///
/// Cheap to clone; every consumer shares the same underlying pool. The pool
/// is capped at a single connection: the execution model is one interactive
/// session, so there is never a concurrent writer to coordinate.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the store at `path`, create all tables if absent,
    /// and seed the default operator accounts.
    ///
    /// This is the only fatal failure point of the layer: if the file cannot
    /// be opened, no `Store` value exists and no other operation can be
    /// attempted.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true);
        let store = Self::connect(options).await?;
        tracing::info!(path = %path.as_ref().display(), "connected to store");
        store.initialize().await?;
        Ok(store)
    }

    /// Open an in-memory store (tests and the self-check path).
    pub async fn open_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        let store = Self::connect(options).await?;
        store.initialize().await?;
        Ok(store)
    }

    async fn connect(options: SqliteConnectOptions) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Idempotent schema creation followed by the default-user seed.
    ///
    /// Safe to run against an already-populated store: every table is
    /// `CREATE TABLE IF NOT EXISTS` and seeding skips present usernames.
    pub async fn initialize(&self) -> StoreResult<()> {
        self.create_tables().await?;
        self.seed_default_users().await?;
        Ok(())
    }

    /// Shared pool accessor for the entity modules.
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the store, draining the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("store connection closed");
    }

    async fn create_tables(&self) -> StoreResult<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                username      TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                role          TEXT DEFAULT 'operator'
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                barcode        TEXT UNIQUE,
                sku_id         TEXT UNIQUE NOT NULL,
                category       TEXT,
                subcategory    TEXT,
                product_name   TEXT NOT NULL,
                description    TEXT,
                tax_percentage REAL NOT NULL DEFAULT 0.0,
                price          REAL NOT NULL,
                default_unit   TEXT,
                image_path     TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS suppliers (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                supplier_name  TEXT NOT NULL,
                contact_person TEXT,
                phone          TEXT,
                email          TEXT,
                address        TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_name  TEXT NOT NULL,
                contact_person TEXT,
                phone          TEXT,
                email          TEXT,
                address        TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS goods_receipts (
                id                  INTEGER PRIMARY KEY AUTOINCREMENT,
                receipt_date        TEXT NOT NULL,
                product_id          INTEGER NOT NULL,
                supplier_id         INTEGER NOT NULL,
                quantity            REAL NOT NULL,
                unit_of_measurement TEXT NOT NULL,
                rate_per_unit       REAL NOT NULL,
                total_rate          REAL NOT NULL,
                tax_amount          REAL NOT NULL,
                operator_id         INTEGER NOT NULL,
                FOREIGN KEY(product_id) REFERENCES products(id),
                FOREIGN KEY(supplier_id) REFERENCES suppliers(id),
                FOREIGN KEY(operator_id) REFERENCES users(id)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS sales (
                id                  INTEGER PRIMARY KEY AUTOINCREMENT,
                sale_date           TEXT NOT NULL,
                product_id          INTEGER NOT NULL,
                customer_id         INTEGER NOT NULL,
                quantity            REAL NOT NULL,
                unit_of_measurement TEXT NOT NULL,
                rate_per_unit       REAL NOT NULL,
                total_rate          REAL NOT NULL,
                tax_amount          REAL NOT NULL,
                operator_id         INTEGER NOT NULL,
                FOREIGN KEY(product_id) REFERENCES products(id),
                FOREIGN KEY(customer_id) REFERENCES customers(id),
                FOREIGN KEY(operator_id) REFERENCES users(id)
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(classify)?;
        }
        tracing::debug!("store tables checked/created");
        Ok(())
    }

    /// Seed the default operator logins if they do not already exist.
    ///
    /// A username that is already present is skipped with a log line; the
    /// rest of startup continues.
    async fn seed_default_users(&self) -> StoreResult<()> {
        for (username, password) in DEFAULT_OPERATORS {
            let existing = sqlx::query("SELECT id FROM users WHERE username = ?1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(classify)?;

            if let Some(row) = existing {
                let id: i64 = row.try_get("id").map_err(classify)?;
                tracing::debug!(%username, id, "default operator already present");
                continue;
            }

            let password_hash = stockbook_auth::hash_password(password)?;
            let insert = sqlx::query(
                "INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, 'operator')",
            )
            .bind(username)
            .bind(&password_hash)
            .execute(&self.pool)
            .await;

            match insert.map_err(classify) {
                Ok(_) => tracing::info!(%username, "seeded default operator"),
                // Lost a race with another seed pass; already present is fine.
                Err(StoreError::Duplicate(_)) => {
                    tracing::debug!(%username, "default operator already present");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
