use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::{StoreError, UsersRepository};

/// Domain service with the business rules for user management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
}

impl Service {
    /// Create a service over an injected store handle.
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "users.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        debug!("getting user by id");
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    #[instrument(name = "users.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        debug!("listing users");
        let users = self.repo.find_all().await.map_err(map_store_error)?;
        debug!("listed {} users", users.len());
        Ok(users)
    }

    #[instrument(
        name = "users.service.create_user",
        skip(self),
        fields(email = %new_user.email)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("creating new user");

        validate_new_user(&new_user)?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            created_at: now,
            updated_at: now,
        };

        // Uniqueness is enforced by the unique email index; no read-before-write.
        self.repo
            .insert(user.clone())
            .await
            .map_err(map_store_error)?;

        info!(user_id = %user.id, "created user");
        Ok(user)
    }

    #[instrument(name = "users.service.update_user", skip(self), fields(user_id = %id))]
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        info!("updating user");

        validate_user_patch(&patch)?;

        let mut current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if let Some(name) = patch.name {
            current.name = name;
        }
        if let Some(email) = patch.email {
            current.email = email;
        }
        current.updated_at = Utc::now();

        self.repo
            .update_by_id(current.clone())
            .await
            .map_err(map_store_error)?;

        info!("updated user");
        Ok(current)
    }

    #[instrument(name = "users.service.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        info!("deleting user");

        let deleted = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(map_store_error)?;

        if !deleted {
            return Err(DomainError::user_not_found(id));
        }

        info!("deleted user");
        Ok(())
    }
}

fn map_store_error(e: StoreError) -> DomainError {
    match e {
        StoreError::DuplicateEmail { email } => DomainError::email_already_exists(email),
        StoreError::RowNotFound { id } => DomainError::user_not_found(id),
        StoreError::Backend(e) => DomainError::database(e.to_string()),
    }
}

// --- validation helpers ---

fn validate_new_user(new_user: &NewUser) -> Result<(), DomainError> {
    validate_name(&new_user.name)?;
    validate_email(&new_user.email)
}

fn validate_user_patch(patch: &UserPatch) -> Result<(), DomainError> {
    if let Some(ref name) = patch.name {
        validate_name(name)?;
    }
    if let Some(ref email) = patch.email {
        validate_email(email)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::empty_field("name"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.trim().is_empty() {
        return Err(DomainError::empty_field("email"));
    }
    Ok(())
}
