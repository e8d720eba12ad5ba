//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `filmorate_core` wiring: config, logging, database, reference data.
//! - Keep output deterministic for quick local sanity checks.

use filmorate_core::db::open_db;
use filmorate_core::{
    core_version, init_logging, CoreConfig, GenreStorage, MpaStorage, SqliteReferenceStorage,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("filmorate_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env();
    init_logging(&config.log_level, &config.log_dir)?;

    let conn = open_db(&config.db_path)?;
    let reference = SqliteReferenceStorage::try_new(&conn)?;

    println!("filmorate_core version={}", core_version());
    println!("db_path={}", config.db_path.display());
    println!("mpa_count={}", reference.find_all_mpa()?.len());
    println!("genre_count={}", reference.find_all_genres()?.len());
    Ok(())
}
