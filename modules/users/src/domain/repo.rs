use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::User;

/// Failures a store implementation can report.
///
/// `DuplicateEmail` and `RowNotFound` are expected outcomes the service maps
/// onto domain errors; `Backend` is an infrastructure fault.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique index on email rejected the write.
    #[error("email '{email}' violates the unique email index")]
    DuplicateEmail { email: String },

    /// No row exists for the given primary key.
    #[error("no user row for id {id}")]
    RowNotFound { id: Uuid },

    /// The store itself failed (connection lost, corrupt database, ...).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Persist a fully-formed user.
    ///
    /// Email uniqueness comes from the storage-layer unique index; there is
    /// no read-before-write.
    async fn insert(&self, user: User) -> Result<(), StoreError>;
    /// Load a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    /// All users, store-defined order.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;
    /// Overwrite the row addressed by `user.id`.
    async fn update_by_id(&self, user: User) -> Result<(), StoreError>;
    /// Delete by primary key. Returns true if a row was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}
