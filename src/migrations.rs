//! Schema migrations
//!
//! Applied migrations are recorded in `schema_version`; applying twice is a no-op.

use crate::error::{Result, StoreError};
use crate::schema::Schema;
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: String,
}

/// All migrations in application order
pub fn migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_create_utilisateurs",
        sql: Schema::users().to_sql(),
    }]
}

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| StoreError::migration("schema_version", e))?;

    for migration in migrations() {
        apply_migration(conn, &migration)?;
    }
    Ok(())
}

fn apply_migration(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let fail = |e: rusqlite::Error| StoreError::migration(migration.id, e);

    let applied = conn
        .query_row(
            "SELECT 1 FROM schema_version WHERE migration_id = ?1",
            [migration.id],
            |_| Ok(()),
        )
        .optional()
        .map_err(fail)?
        .is_some();
    if applied {
        return Ok(());
    }

    let tx = conn.transaction().map_err(fail)?;
    tx.execute_batch(&migration.sql).map_err(fail)?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at) VALUES (?1, strftime('%s', 'now'))",
        [migration.id],
    )
    .map_err(fail)?;
    tx.commit().map_err(fail)?;

    info!(migration_id = migration.id, "applied migration");
    Ok(())
}
