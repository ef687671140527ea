//! In-memory user list kept in step with the store.
//!
//! The list is loaded once and then patched with the record each mutation
//! returns, so a write never re-reads the whole table.

use crate::error::StoreError;
use crate::service::UserStore;
use crate::user::{NewUser, User};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The users currently shown, backed by a [`UserStore`].
pub struct UserListModel<S> {
    store: S,
    users: Vec<User>,
}

impl<S: UserStore> UserListModel<S> {
    /// An empty model; call [`load`](Self::load) to fill it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            users: Vec::new(),
        }
    }

    /// Replace the list with a fresh snapshot of the store.
    pub async fn load(&mut self) -> Result<&[User], ModelError> {
        self.users = self.store.list_all().await?;
        Ok(&self.users)
    }

    /// Insert a user from form input. Blank fields are rejected before any write.
    pub async fn add(&mut self, name: &str, email: &str) -> Result<&User, ModelError> {
        let new_user = NewUser::new(name, email);
        if let Some(field) = new_user.blank_field() {
            return Err(ValidationError::Blank { field }.into());
        }

        let user = self.store.insert(new_user).await?;
        self.users.push(user);
        let idx = self.users.len() - 1;
        Ok(&self.users[idx])
    }

    /// Delete `user` and drop it from the list. Returns whether the store had it.
    pub async fn remove(&mut self, user: &User) -> Result<bool, ModelError> {
        let deleted = self.store.delete(user.id).await?;
        self.users.retain(|u| u.id != user.id);
        debug!(id = user.id, found = deleted.is_some(), "removed user from list");
        Ok(deleted.is_some())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
