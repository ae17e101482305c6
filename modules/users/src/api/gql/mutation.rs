use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::api::gql::dto::{CreateUserInput, UpdateUserInput, UserDto};
use crate::api::gql::error::{gql_error, unknown_id};
use crate::domain::service::Service;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user; id and timestamps are generated server-side.
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<UserDto> {
        let svc = ctx.data::<Arc<Service>>()?;
        let user = svc.create_user(input.into()).await.map_err(gql_error)?;
        Ok(user.into())
    }

    /// Apply the provided fields to an existing user.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<UserDto> {
        let svc = ctx.data::<Arc<Service>>()?;
        let uuid = Uuid::parse_str(&id).map_err(|_| unknown_id(&id))?;
        let user = svc.update_user(uuid, input.into()).await.map_err(gql_error)?;
        Ok(user.into())
    }

    /// Hard-delete a user. Returns true when a record was removed.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let svc = ctx.data::<Arc<Service>>()?;
        let uuid = Uuid::parse_str(&id).map_err(|_| unknown_id(&id))?;
        svc.delete_user(uuid).await.map_err(gql_error)?;
        Ok(true)
    }
}
