use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::db::Database;
use crate::models::Category;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    let mut out = io::stdout().lock();
    match args[1].as_str() {
        "demo" => super::demo::run(db, &mut out),
        "categories" | "c" => cli_categories(db, &mut out),
        "products" | "p" => cli_products(&args[2..], db, &mut out),
        "add-category" => cli_add_category(&args[2..], db, &mut out),
        "add-product" => cli_add_product(&args[2..], db, &mut out),
        "move" => cli_move(&args[2..], db, &mut out),
        "delete-category" => cli_delete_category(&args[2..], db, &mut out),
        "export" => cli_export(&args[2..], db, &mut out),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("catalogstore {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Catalog Store - categories and products in a local database");
    println!();
    println!("Usage: catalogstore [--db <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none), demo                          Run the demonstration sequence");
    println!("  categories                            List all categories");
    println!("  products [<category_id>]              List products (all, or one category; a name also works)");
    println!("  add-category <name>                   Create a category");
    println!("  add-product <name> <price> <cat_id>   Create a product under an existing category");
    println!("  move <product_id> <category_id>       Move a product to another category");
    println!("  delete-category <id>                  Delete a category and its products");
    println!("  export [path]                         Export products to CSV");
    println!("    --category <id>                     Only export one category");
    println!("  --help, -h                            Show this help");
    println!("  --version, -V                         Show version");
    println!();
    println!("The database path can also be set with CATALOG_DB.");
}

fn parse_id(value: Option<&String>, what: &str) -> Result<i64> {
    let raw = value.ok_or_else(|| anyhow::anyhow!("Missing {what}"))?;
    raw.parse::<i64>()
        .with_context(|| format!("Invalid {what}: {raw}"))
}

fn cli_categories(db: &Database, out: &mut impl Write) -> Result<()> {
    let categories = db.get_categories()?;
    if categories.is_empty() {
        writeln!(out, "No categories")?;
        return Ok(());
    }

    writeln!(out, "{:<6} {:<24} Products", "ID", "Name")?;
    writeln!(out, "{}", "─".repeat(40))?;
    let products = db.get_products()?;
    for cat in &categories {
        let count = products.iter().filter(|p| p.belongs_to(cat.id)).count();
        writeln!(out, "{:<6} {:<24} {count}", cat.id, cat.name)?;
    }
    writeln!(out, "Total products: {}", db.get_product_count()?)?;
    Ok(())
}

fn cli_products(args: &[String], db: &Database, out: &mut impl Write) -> Result<()> {
    if args.is_empty() {
        let products = db.get_products()?;
        if products.is_empty() {
            writeln!(out, "No products")?;
        }
        for product in &products {
            writeln!(out, "{product}")?;
        }
        return Ok(());
    }

    // An integer is always an ID; anything else is tried as a category name
    let category_id = match args[0].parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            let categories = db.get_categories()?;
            match Category::find_by_name(&categories, &args[0]) {
                Some(cat) => cat.id,
                None => parse_id(args.first(), "category ID")?,
            }
        }
    };
    let products = super::list_products(db, category_id, out)?;
    if products.is_empty() {
        match db.get_category_by_id(category_id)? {
            Some(cat) => writeln!(out, "No products in {}", cat.name)?,
            None => writeln!(out, "Category with ID={category_id} not found")?,
        }
    }
    Ok(())
}

fn cli_add_category(args: &[String], db: &Database, out: &mut impl Write) -> Result<()> {
    let name = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: catalogstore add-category <name>"))?;
    super::create_category(db, name, out)?;
    Ok(())
}

fn cli_add_product(args: &[String], db: &Database, out: &mut impl Write) -> Result<()> {
    if args.len() < 3 {
        anyhow::bail!("Usage: catalogstore add-product <name> <price> <category_id>");
    }
    let name = &args[0];
    let price: f64 = args[1]
        .parse()
        .with_context(|| format!("Invalid price: {}", args[1]))?;
    let category_id = parse_id(args.get(2), "category ID")?;
    super::create_product(db, name, price, category_id, out)?;
    Ok(())
}

fn cli_move(args: &[String], db: &Database, out: &mut impl Write) -> Result<()> {
    let product_id = parse_id(args.first(), "product ID")?;
    let category_id = parse_id(args.get(1), "category ID")?;
    super::move_product(db, product_id, category_id, out)?;
    Ok(())
}

fn cli_delete_category(args: &[String], db: &mut Database, out: &mut impl Write) -> Result<()> {
    let category_id = parse_id(args.first(), "category ID")?;
    super::delete_category(db, category_id, out)?;
    Ok(())
}

fn cli_export(args: &[String], db: &Database, out: &mut impl Write) -> Result<()> {
    let mut category_id = None;
    let mut output_path = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--category" {
            category_id = Some(parse_id(args.get(i + 1), "category ID")?);
            i += 2;
            continue;
        }
        // Output path is the first non-flag argument
        if output_path.is_none() && !args[i].starts_with('-') {
            output_path = Some(PathBuf::from(shellexpand(&args[i])));
        }
        i += 1;
    }
    let output_path = output_path.unwrap_or_else(|| PathBuf::from("products.csv"));

    let count = db.export_products_csv(&output_path, category_id)?;
    if count == 0 {
        writeln!(out, "No products to export")?;
    } else {
        writeln!(
            out,
            "Exported {count} products to {}",
            output_path.display()
        )?;
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
