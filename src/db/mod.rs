mod export;
mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let db = Self { conn };
        db.bootstrap().context("Schema bootstrap failed")?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let db = Self { conn };
        db.bootstrap()?;
        Ok(db)
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub(crate) fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")?;
        tracing::debug!("database closed");
        Ok(())
    }

    fn bootstrap(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA)?;
        Ok(())
    }

    // ── Categories ────────────────────────────────────────────

    pub(crate) fn create_category(&self, name: &str) -> Result<Category> {
        self.conn
            .execute("INSERT INTO categories (name) VALUES (?1)", params![name])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, "category created");
        Ok(Category {
            id,
            name: name.to_string(),
        })
    }

    pub(crate) fn get_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], category_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_category_by_id(&self, id: i64) -> Result<Option<Category>> {
        let result = self.conn.query_row(
            "SELECT id, name FROM categories WHERE id = ?1",
            params![id],
            category_from_row,
        );
        match result {
            Ok(c) => Ok(Some(c)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a category together with every product that references it.
    ///
    /// Returns the number of products removed, or `None` when no category has
    /// this ID. Both deletes commit in one transaction.
    pub(crate) fn delete_category(&mut self, category_id: i64) -> Result<Option<usize>> {
        let tx = self.conn.transaction()?;
        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
            params![category_id],
            |row| row.get(0),
        )?;
        if !exists {
            tracing::debug!(category_id, "delete skipped, category not found");
            return Ok(None);
        }

        let removed = tx.execute(
            "DELETE FROM products WHERE category_id = ?1",
            params![category_id],
        )?;
        tx.execute("DELETE FROM categories WHERE id = ?1", params![category_id])?;
        tx.commit()?;

        tracing::info!(category_id, products_removed = removed, "category deleted");
        Ok(Some(removed))
    }

    // ── Products ──────────────────────────────────────────────

    /// Insert a product under `category_id`.
    ///
    /// The category is not looked up first; the foreign key rejects an unknown ID.
    pub(crate) fn create_product(&self, name: &str, price: f64, category_id: i64) -> Result<Product> {
        self.conn.execute(
            "INSERT INTO products (name, price, category_id) VALUES (?1, ?2, ?3)",
            params![name, price, category_id],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, category_id, "product created");
        Ok(Product {
            id,
            name: name.to_string(),
            price,
            category_id: Some(category_id),
        })
    }

    pub(crate) fn get_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, price, category_id FROM products ORDER BY id")?;
        let rows = stmt.query_map([], product_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_products_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, price, category_id FROM products WHERE category_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![category_id], product_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_product_by_id(&self, id: i64) -> Result<Option<Product>> {
        let result = self.conn.query_row(
            "SELECT id, name, price, category_id FROM products WHERE id = ?1",
            params![id],
            product_from_row,
        );
        match result {
            Ok(p) => Ok(Some(p)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn get_product_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?)
    }

    /// Move a product to another category. `None` means the product does not exist.
    pub(crate) fn update_product_category(
        &self,
        product_id: i64,
        new_category_id: i64,
    ) -> Result<Option<Product>> {
        let changed = self.conn.execute(
            "UPDATE products SET category_id = ?1 WHERE id = ?2",
            params![new_category_id, product_id],
        )?;
        if changed == 0 {
            tracing::debug!(product_id, "update skipped, product not found");
            return Ok(None);
        }
        tracing::debug!(product_id, new_category_id, "product moved");
        self.get_product_by_id(product_id)
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        category_id: row.get(3)?,
    })
}
