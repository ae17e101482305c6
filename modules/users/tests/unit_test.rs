use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use users::api::gql::build_schema;
use users::contract::error::UsersError;
use users::contract::model::{NewUser, User, UserPatch};
use users::domain::error::DomainError;
use users::domain::repo::{StoreError, UsersRepository};
use users::domain::service::Service;

#[test]
fn contract_models_hold_their_fields() {
    let user = User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    assert_eq!(user.name, "Test User");
    assert_eq!(user.email, "test@example.com");

    let new_user = NewUser {
        name: "New User".to_string(),
        email: "new@example.com".to_string(),
    };
    assert_eq!(new_user.name, "New User");

    let patch = UserPatch {
        name: None,
        email: Some("updated@example.com".to_string()),
    };
    assert_eq!(patch.email.as_deref(), Some("updated@example.com"));
    assert_eq!(patch.name, None);
    assert_eq!(UserPatch::default(), UserPatch { name: None, email: None });
}

#[test]
fn contract_error_codes_are_stable() {
    let id = Uuid::new_v4();
    assert_eq!(UsersError::not_found(id).code(), "NOT_FOUND");
    assert_eq!(
        UsersError::conflict("a@b.com".to_string()).code(),
        "CONFLICT"
    );
    assert_eq!(UsersError::validation("bad input").code(), "VALIDATION");
    assert_eq!(UsersError::internal().code(), "INTERNAL");

    // the internal kind never exposes detail
    assert_eq!(UsersError::internal().to_string(), "internal error");
}

#[test]
fn domain_error_constructors() {
    let id = Uuid::new_v4();
    match DomainError::user_not_found(id) {
        DomainError::UserNotFound { id: error_id } => assert_eq!(error_id, id),
        other => panic!("expected UserNotFound, got {other:?}"),
    }

    match DomainError::email_already_exists("a@b.com".to_string()) {
        DomainError::EmailAlreadyExists { email } => assert_eq!(email, "a@b.com"),
        other => panic!("expected EmailAlreadyExists, got {other:?}"),
    }

    match DomainError::empty_field("name") {
        DomainError::EmptyField { field } => assert_eq!(field, "name"),
        other => panic!("expected EmptyField, got {other:?}"),
    }

    match DomainError::database("boom") {
        DomainError::Database { message } => assert_eq!(message, "boom"),
        other => panic!("expected Database, got {other:?}"),
    }
}

/// Repository double whose every call fails like an unreachable store.
struct UnreachableStore;

#[async_trait]
impl UsersRepository for UnreachableStore {
    async fn insert(&self, _user: User) -> Result<(), StoreError> {
        Err(StoreError::Backend(anyhow::anyhow!("connection refused")))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, StoreError> {
        Err(StoreError::Backend(anyhow::anyhow!("connection refused")))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Err(StoreError::Backend(anyhow::anyhow!("connection refused")))
    }

    async fn update_by_id(&self, _user: User) -> Result<(), StoreError> {
        Err(StoreError::Backend(anyhow::anyhow!("connection refused")))
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<bool, StoreError> {
        Err(StoreError::Backend(anyhow::anyhow!("connection refused")))
    }
}

#[tokio::test]
async fn store_failures_surface_as_database_errors() {
    let service = Service::new(Arc::new(UnreachableStore));

    let err = service.list_users().await.expect_err("must fail");
    assert!(matches!(err, DomainError::Database { .. }));

    let err = service
        .create_user(NewUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        })
        .await
        .expect_err("must fail");
    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn graphql_redacts_infrastructure_detail() {
    let schema = build_schema(Arc::new(Service::new(Arc::new(UnreachableStore))));

    let resp = schema.execute("{ users { id } }").await;
    let err = resp.errors.first().expect("expected an error");
    assert_eq!(err.message, "internal error");
    let ext = err.extensions.as_ref().expect("expected extensions");
    assert_eq!(
        ext.get("code").expect("expected code").to_string(),
        "\"INTERNAL\""
    );
}
