pub mod dto;
pub mod error;
pub mod mutation;
pub mod query;
pub mod routes;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::domain::service::Service;

pub type UsersSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with the domain service injected as context data.
pub fn build_schema(service: Arc<Service>) -> UsersSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}
