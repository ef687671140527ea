//! Record access layer over the `Utilisateurs` table.

use crate::config::StoreConfig;
use crate::db;
use crate::error::{Result, StoreError};
use crate::migrations::apply_migrations;
use crate::user::{NewUser, User};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// The three operations callers may perform on stored users.
pub trait UserRepository {
    /// Every stored user, in storage order.
    fn list_all(&self) -> Result<Vec<User>>;

    /// Store a new user and return it with its assigned id.
    fn insert(&mut self, user: NewUser) -> Result<User>;

    /// Delete the user with `id`, returning it if a row matched.
    ///
    /// Deleting an id that does not exist is not an error.
    fn delete(&mut self, id: i64) -> Result<Option<User>>;
}

/// `UserRepository` backed by one SQLite connection.
pub struct SqliteUserRepository {
    conn: Connection,
    path: String,
}

impl SqliteUserRepository {
    /// Open the configured database and bring its schema up to date.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let mut conn = db::open(config)?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn,
            path: config.db_path.clone(),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl UserRepository for SqliteUserRepository {
    fn list_all(&self) -> Result<Vec<User>> {
        let unavailable = |e: rusqlite::Error| StoreError::unavailable(self.path.as_str(), e);

        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name, email FROM Utilisateurs")
            .map_err(unavailable)?;
        let users = stmt
            .query_map([], User::from_row)
            .map_err(unavailable)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(unavailable)?;

        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    fn insert(&mut self, user: NewUser) -> Result<User> {
        let id = self
            .conn
            .prepare_cached(
                "INSERT INTO Utilisateurs (name, email) VALUES (?1, ?2) RETURNING id",
            )
            .and_then(|mut stmt| {
                stmt.query_row(params![user.name, user.email], |row| row.get::<_, i64>(0))
            })
            .map_err(|e| StoreError::write_failed("insert", e))?;

        debug!(id, "inserted user");
        Ok(User {
            id,
            name: user.name,
            email: user.email,
        })
    }

    fn delete(&mut self, id: i64) -> Result<Option<User>> {
        let deleted = self
            .conn
            .prepare_cached("DELETE FROM Utilisateurs WHERE id = ?1 RETURNING id, name, email")
            .and_then(|mut stmt| stmt.query_row([id], User::from_row).optional())
            .map_err(|e| StoreError::write_failed("delete", e))?;

        debug!(id, matched = deleted.is_some(), "deleted user");
        Ok(deleted)
    }
}
