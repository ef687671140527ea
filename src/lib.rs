//! SQLite-backed user records.
//!
//! # Intention
//!
//! - Persist user records (name, email) in a single embedded SQLite table.
//! - Expose exactly three operations over it: list, insert and delete.
//! - Keep async callers off the blocking SQLite path.
//!
//! # Architectural Boundaries
//!
//! - Only storage and the list state built on top of it belong here.
//! - No rendering, navigation or presentation concerns.

pub mod config;
pub mod db;
pub mod error;
pub mod migrations;
pub mod model;
pub mod repository;
pub mod schema;
pub mod service;
pub mod user;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use model::{ModelError, UserListModel, ValidationError};
pub use repository::{SqliteUserRepository, UserRepository};
pub use service::{UserService, UserStore};
pub use user::{NewUser, User};
