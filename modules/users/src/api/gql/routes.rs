use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, Json},
    routing::{get, post_service},
    Router,
};
use serde_json::{json, Value};

use crate::api::gql::UsersSchema;

/// Mount the GraphQL endpoint, the playground UI, and the health probe.
pub fn router(schema: UsersSchema) -> Router {
    Router::new()
        .route(
            "/graphql",
            post_service(GraphQL::new(schema.clone())).get_service(GraphQL::new(schema)),
        )
        .route("/playground", get(playground))
        .route("/healthz", get(health_check))
}

async fn playground() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
