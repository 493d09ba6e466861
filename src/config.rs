use tbl::Result;

use std::{env, path::PathBuf};

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Environment variable naming the account store file
pub const STORE_PATH_VAR: &str = "TBL_STORE_PATH";

pub const DEFAULT_STORE_PATH: &str = "bank_accounts.csv";

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}

pub fn store_path() -> PathBuf {
    return env::var_os(STORE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
}
