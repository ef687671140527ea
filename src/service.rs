//! Async access to the user store.
//!
//! SQLite calls block, so every operation runs on tokio's blocking pool and
//! the caller awaits the result.

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::repository::{SqliteUserRepository, UserRepository};
use crate::user::{NewUser, User};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Async counterpart of [`UserRepository`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>>;
    async fn insert(&self, user: NewUser) -> Result<User>;
    async fn delete(&self, id: i64) -> Result<Option<User>>;
}

static SHARED: OnceCell<UserService> = OnceCell::const_new();

/// Cloneable handle to one open store.
///
/// Calls share one connection behind a mutex. A call that panics does not
/// take the store down with it: each repository call is a single statement,
/// so the next call takes the lock over and carries on.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<Mutex<SqliteUserRepository>>,
}

impl UserService {
    /// Open the store described by `config` on a blocking worker.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        let repo = run_blocking(move || SqliteUserRepository::open(&config)).await?;
        info!(path = repo.path(), "user service started");
        Ok(Self::from_repository(repo))
    }

    pub fn from_repository(repo: SqliteUserRepository) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
        }
    }

    /// The process-wide store, opened on first use.
    ///
    /// Later calls return the same instance and ignore their `config`.
    pub async fn shared(config: StoreConfig) -> Result<&'static UserService> {
        SHARED.get_or_try_init(|| Self::open(config)).await
    }

    async fn with_repo<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteUserRepository) -> Result<T> + Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        run_blocking(move || {
            let mut guard = repo.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        })
        .await
    }
}

#[async_trait]
impl UserStore for UserService {
    async fn list_all(&self) -> Result<Vec<User>> {
        self.with_repo(|repo| repo.list_all()).await
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        self.with_repo(move |repo| repo.insert(user)).await
    }

    async fn delete(&self, id: i64) -> Result<Option<User>> {
        self.with_repo(move |repo| repo.delete(id)).await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        warn!(error = %e, "store worker failed");
        StoreError::WorkerFailed(e.to_string())
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn panicking_worker_maps_to_worker_failed() {
        let result = run_blocking(|| -> Result<()> { panic!("boom") }).await;
        assert!(matches!(result, Err(StoreError::WorkerFailed(_))));
    }

    #[tokio::test]
    async fn store_recovers_after_panic_under_lock() {
        let service = UserService::open(StoreConfig::in_memory()).await.unwrap();
        service
            .insert(NewUser::new("Alice", "alice@x.com"))
            .await
            .unwrap();

        let result = service
            .with_repo(|_repo| -> Result<()> { panic!("boom") })
            .await;
        assert!(matches!(result, Err(StoreError::WorkerFailed(_))));

        let users = service.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        let bob = service.insert(NewUser::new("Bob", "bob@x.com")).await.unwrap();
        assert_eq!(bob.id, 2);
    }
}
