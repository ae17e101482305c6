//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a pooled
//! `DatabaseConnection` or a transactional connection.

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, Set, SqlErr};
use uuid::Uuid;

use crate::contract::model::User;
use crate::domain::repo::{StoreError, UsersRepository};
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};

pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

fn full_row(user: User) -> UserAM {
    UserAM {
        id: Set(user.id),
        name: Set(user.name),
        email: Set(user.email),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let email = user.email.clone();
        match full_row(user).insert(&self.conn).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateEmail { email }),
            Err(e) => Err(anyhow::Error::new(e).context("insert failed").into()),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = UserEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(&self, user: User) -> Result<(), StoreError> {
        let id = user.id;
        let email = user.email.clone();
        match full_row(user).update(&self.conn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(StoreError::RowNotFound { id }),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateEmail { email }),
            Err(e) => Err(anyhow::Error::new(e).context("update_by_id failed").into()),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete_by_id failed")?;
        Ok(res.rows_affected > 0)
    }
}
