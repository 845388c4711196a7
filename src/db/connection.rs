use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Environment variable that overrides the store location, mirroring how the
/// hosted deployment pointed the client at its backend.
const DB_PATH_ENV: &str = "CARNET_DB_PATH";
/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".carnet-cuisine";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "carnet.sqlite";

/// Ensure the database file exists, create any missing tables, and return a
/// live connection. The rows themselves arrive out-of-band (other tools write
/// this store); bootstrapping the schema here just means a first run renders
/// empty states instead of failing.
pub fn ensure_schema() -> Result<Connection> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Open a throwaway in-memory store with the full schema applied. Tests use
/// this to exercise real queries without touching the filesystem.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Resolve the absolute path to the SQLite store: the `CARNET_DB_PATH`
/// override when set, otherwise a fixed spot inside the user's home.
pub fn db_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(DB_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS alimentation_liste_de_course (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            liste_de_course TEXT NOT NULL,
            created_at TEXT
        )",
        [],
    )
    .context("failed to create shopping list table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS alimentation_recette (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            noms TEXT NOT NULL,
            recette TEXT NOT NULL,
            created_at TEXT
        )",
        [],
    )
    .context("failed to create recipes table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS historique_recette (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            recette TEXT NOT NULL,
            created_at TEXT
        )",
        [],
    )
    .context("failed to create historical recipes table")?;

    Ok(())
}
