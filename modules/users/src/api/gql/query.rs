use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::api::gql::dto::UserDto;
use crate::api::gql::error::{gql_error, unknown_id};
use crate::domain::service::Service;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All user records, in store order.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserDto>> {
        let svc = ctx.data::<Arc<Service>>()?;
        let users = svc.list_users().await.map_err(gql_error)?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// A single user by id.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<UserDto> {
        let svc = ctx.data::<Arc<Service>>()?;
        let uuid = Uuid::parse_str(&id).map_err(|_| unknown_id(&id))?;
        let user = svc.get_user(uuid).await.map_err(gql_error)?;
        Ok(user.into())
    }
}
