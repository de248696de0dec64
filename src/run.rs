mod cli;
mod demo;

use anyhow::Result;
use std::io::{self, Write};

use crate::db::Database;
use crate::models::{Category, Product};

pub(crate) use cli::as_cli;

pub(crate) fn as_demo(db: &mut Database) -> Result<()> {
    let mut out = io::stdout().lock();
    demo::run(db, &mut out)
}

// ── Status lines ─────────────────────────────────────────────

fn create_category(db: &Database, name: &str, out: &mut impl Write) -> Result<Category> {
    let category = db.create_category(name)?;
    writeln!(out, "Category '{name}' created with ID={}", category.id)?;
    Ok(category)
}

fn create_product(
    db: &Database,
    name: &str,
    price: f64,
    category_id: i64,
    out: &mut impl Write,
) -> Result<Product> {
    let product = db.create_product(name, price, category_id)?;
    writeln!(out, "Product '{name}' created with ID={}", product.id)?;
    Ok(product)
}

fn list_products(db: &Database, category_id: i64, out: &mut impl Write) -> Result<Vec<Product>> {
    let products = db.get_products_by_category(category_id)?;
    for product in &products {
        writeln!(out, "{product}")?;
    }
    Ok(products)
}

fn move_product(
    db: &Database,
    product_id: i64,
    new_category_id: i64,
    out: &mut impl Write,
) -> Result<bool> {
    match db.update_product_category(product_id, new_category_id)? {
        Some(_) => {
            writeln!(
                out,
                "Product ID={product_id} updated to new category ID={new_category_id}"
            )?;
            Ok(true)
        }
        None => {
            writeln!(out, "Product with ID={product_id} not found")?;
            Ok(false)
        }
    }
}

fn delete_category(db: &mut Database, category_id: i64, out: &mut impl Write) -> Result<bool> {
    match db.delete_category(category_id)? {
        Some(_) => {
            writeln!(
                out,
                "Category ID={category_id} and all associated products deleted"
            )?;
            Ok(true)
        }
        None => {
            writeln!(out, "Category with ID={category_id} not found")?;
            Ok(false)
        }
    }
}
