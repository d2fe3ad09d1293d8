//! SQLite persistence layer for the bean menu and customer orders.
//!
//! [`Store`] owns a single connection behind a mutex and is handed to the
//! HTTP layer explicitly. Every operation touches at most one record, so the
//! connection lock is the only coordination needed.

pub mod seed;

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use beanhouse_core::{Bean, NewBean, Order, OrderStatus, ShopError};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, error, info};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS beans (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        origin TEXT NOT NULL,
        roast_level TEXT NOT NULL,
        flavor TEXT NOT NULL,
        price INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        items TEXT NOT NULL,
        total_amount INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'Pending'
            CHECK (status IN ('Pending', 'Ready', 'Completed')),
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_orders_created_at ON orders (created_at);
";

const ORDER_COLUMNS: &str = "id, items, total_amount, status, created_at";

/// Durable bean and order tables.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Opens (or creates) the database file at `path` and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ShopError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(ShopError::storage)?;
        }
        let conn = Connection::open(path).map_err(ShopError::storage)?;
        let store = Self::with_connection(conn)?;
        info!("Database initialized at {}", path.display());
        Ok(store)
    }

    /// Opens a private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self, ShopError> {
        let conn = Connection::open_in_memory().map_err(ShopError::storage)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, ShopError> {
        conn.execute_batch(SCHEMA).map_err(ShopError::storage)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// Acquires the connection lock, converting poison errors to `ShopError`.
    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ShopError> {
        self.conn.lock().map_err(|e| {
            error!("DB lock poisoned: {}", e);
            ShopError::Storage("database lock error".into())
        })
    }

    /// Lists every bean on the menu in insertion order.
    pub fn list_beans(&self) -> Result<Vec<Bean>, ShopError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT id, name, origin, roast_level, flavor, price FROM beans ORDER BY id")
            .map_err(ShopError::storage)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Bean {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    origin: row.get(2)?,
                    roast_level: row.get(3)?,
                    flavor: row.get(4)?,
                    price: row.get(5)?,
                })
            })
            .map_err(ShopError::storage)?;
        let beans = rows.collect::<Result<Vec<_>, _>>().map_err(ShopError::storage)?;
        Ok(beans)
    }

    pub fn count_beans(&self) -> Result<i64, ShopError> {
        let conn = self.lock()?;
        conn.query_row("SELECT COUNT(*) FROM beans", [], |r| r.get(0))
            .map_err(ShopError::storage)
    }

    /// Inserts all beans in a single transaction.
    pub fn insert_beans(&self, beans: &[NewBean<'_>]) -> Result<(), ShopError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(ShopError::storage)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO beans (name, origin, roast_level, flavor, price)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(ShopError::storage)?;
            for bean in beans {
                stmt.execute(params![bean.name, bean.origin, bean.roast_level, bean.flavor, bean.price])
                    .map_err(ShopError::storage)?;
            }
        }
        tx.commit().map_err(ShopError::storage)
    }

    /// Records a new order. Status starts at [`OrderStatus::default`] (`Pending`).
    pub fn create_order(&self, items: &str, total_amount: i64) -> Result<Order, ShopError> {
        let status = OrderStatus::default();
        let created_at = Utc::now().trunc_subsecs(6);
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO orders (items, total_amount, status, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![items, total_amount, status.as_str(), encode_timestamp(&created_at)],
        )
        .map_err(ShopError::storage)?;
        let id = conn.last_insert_rowid();
        debug!("Created order {} for {}", id, items);
        Ok(Order {
            id,
            items: items.to_string(),
            total_amount,
            status,
            created_at,
        })
    }

    pub fn get_order(&self, id: i64) -> Result<Order, ShopError> {
        let conn = self.lock()?;
        fetch_order(&conn, id)
    }

    /// Lists all orders, most recent first.
    pub fn list_orders(&self) -> Result<Vec<Order>, ShopError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"
            ))
            .map_err(ShopError::storage)?;
        let rows = stmt.query_map([], read_order_row).map_err(ShopError::storage)?;
        let orders = rows
            .map(|row| row.map_err(ShopError::storage)?.into_order())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(orders)
    }

    /// Overwrites an order's status and returns the updated record.
    pub fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order, ShopError> {
        let conn = self.lock()?;
        let changed = conn
            .execute(
                "UPDATE orders SET status = ?1 WHERE id = ?2",
                params![status.as_str(), id],
            )
            .map_err(ShopError::storage)?;
        if changed == 0 {
            return Err(ShopError::OrderNotFound(id));
        }
        fetch_order(&conn, id)
    }
}

fn fetch_order(conn: &Connection, id: i64) -> Result<Order, ShopError> {
    conn.query_row(
        &format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1"),
        params![id],
        read_order_row,
    )
    .optional()
    .map_err(ShopError::storage)?
    .ok_or(ShopError::OrderNotFound(id))?
    .into_order()
}

/// Raw column values; status and timestamp are validated in [`OrderRow::into_order`].
struct OrderRow {
    id: i64,
    items: String,
    total_amount: i64,
    status: String,
    created_at: String,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, ShopError> {
        Ok(Order {
            id: self.id,
            items: self.items,
            total_amount: self.total_amount,
            status: self.status.parse()?,
            created_at: decode_timestamp(&self.created_at)?,
        })
    }
}

fn read_order_row(row: &Row<'_>) -> rusqlite::Result<OrderRow> {
    Ok(OrderRow {
        id: row.get(0)?,
        items: row.get(1)?,
        total_amount: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
    })
}

// Fixed-width UTC so lexical order in SQLite matches chronological order.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, ShopError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ShopError::Storage(format!("bad timestamp '{raw}': {e}")))
}
