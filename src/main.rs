mod config;
mod db;
mod logging;
mod models;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();

    let mut args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_args_and_env(&mut args)?;
    let mut db = db::Database::open(&config.db_path)?;

    let result = match args.len() {
        1 => run::as_demo(&mut db),
        _ => run::as_cli(&args, &mut db),
    };
    let closed = db.close();
    finish(result, closed)
}

/// The command's own error wins over a failure to close the database.
fn finish(result: Result<()>, closed: Result<()>) -> Result<()> {
    result?;
    closed
}
