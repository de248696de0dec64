use anyhow::{Context, Result};
use std::path::Path;

use super::Database;
use crate::models::format_price;

impl Database {
    /// Write products as CSV (`id,name,price,category_id`), optionally limited
    /// to one category. Returns the number of rows written.
    pub(crate) fn export_products_csv(&self, path: &Path, category_id: Option<i64>) -> Result<usize> {
        let products = match category_id {
            Some(cid) => self.get_products_by_category(cid)?,
            None => self.get_products()?,
        };

        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        wtr.write_record(["id", "name", "price", "category_id"])?;
        for product in &products {
            wtr.write_record([
                product.id.to_string(),
                product.name.clone(),
                format_price(product.price),
                product
                    .category_id
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ])?;
        }
        wtr.flush().context("Failed to flush CSV file")?;

        tracing::debug!(path = %path.display(), rows = products.len(), "products exported");
        Ok(products.len())
    }
}
