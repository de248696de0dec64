use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub(crate) const DB_ENV_VAR: &str = "CATALOG_DB";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
}

impl Config {
    /// Resolve the database path: `--db <path>`, then `CATALOG_DB`, then the
    /// platform data directory. The `--db` pair is removed from `args`.
    pub(crate) fn from_args_and_env(args: &mut Vec<String>) -> Result<Self> {
        Self::resolve(args, std::env::var_os(DB_ENV_VAR), default_db_path)
    }

    fn resolve(
        args: &mut Vec<String>,
        env_value: Option<OsString>,
        default: impl FnOnce() -> Result<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = take_db_flag(args)? {
            return Ok(Self { db_path: path });
        }
        if let Some(path) = env_value.filter(|v| !v.is_empty()) {
            return Ok(Self {
                db_path: PathBuf::from(path),
            });
        }
        Ok(Self {
            db_path: default()?,
        })
    }
}

fn take_db_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--db") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("--db requires a path");
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(value)))
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "catalogstore", "CatalogStore")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("catalog.db"))
}
