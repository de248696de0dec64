use anyhow::Result;
use std::io::Write;

use crate::db::Database;

/// The fixed walkthrough: two categories, three products, one move, one
/// cascading delete.
pub(super) fn run(db: &mut Database, out: &mut impl Write) -> Result<()> {
    let electronics = super::create_category(db, "Electronics", out)?;
    let groceries = super::create_category(db, "Groceries", out)?;

    let laptop = super::create_product(db, "Laptop", 1200.99, electronics.id, out)?;
    super::create_product(db, "Smartphone", 799.99, electronics.id, out)?;
    super::create_product(db, "Apple", 0.99, groceries.id, out)?;

    writeln!(out, "\nProducts in Electronics:")?;
    super::list_products(db, electronics.id, out)?;

    writeln!(out, "\nProducts in Groceries:")?;
    super::list_products(db, groceries.id, out)?;

    writeln!(out, "\nUpdating product category...")?;
    super::move_product(db, laptop.id, groceries.id, out)?;

    writeln!(out, "\nDeleting category...")?;
    super::delete_category(db, electronics.id, out)?;

    writeln!(out, "\nRemaining products:")?;
    super::list_products(db, groceries.id, out)?;

    Ok(())
}
