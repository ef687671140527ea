//! Connection management

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use rusqlite::Connection;
use tracing::info;

/// Open the configured database and apply connection settings.
pub fn open(config: &StoreConfig) -> Result<Connection> {
    let unavailable = |e: rusqlite::Error| StoreError::unavailable(config.db_path.as_str(), e);

    let conn = if config.is_in_memory() {
        Connection::open_in_memory()
    } else {
        Connection::open(&config.db_path)
    }
    .map_err(unavailable)?;

    conn.busy_timeout(config.busy_timeout).map_err(unavailable)?;
    if !config.is_in_memory() {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(unavailable)?;
        info!(path = %config.db_path, journal_mode = %mode, "opened user store");
    }
    Ok(conn)
}
