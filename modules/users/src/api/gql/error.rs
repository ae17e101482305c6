use async_graphql::ErrorExtensions;
use tracing::error;

use crate::contract::error::UsersError;
use crate::domain::error::DomainError;

/// Map a domain error to the public error taxonomy.
///
/// Database faults are logged here and redacted; callers only ever see the
/// kind, never internal detail.
fn domain_to_api(e: DomainError) -> UsersError {
    match e {
        DomainError::UserNotFound { id } => UsersError::not_found(id),
        DomainError::EmailAlreadyExists { email } => UsersError::conflict(email),
        DomainError::EmptyField { field } => {
            UsersError::validation(format!("{field} cannot be empty"))
        }
        DomainError::Database { message } => {
            error!(%message, "database error");
            UsersError::internal()
        }
    }
}

impl ErrorExtensions for UsersError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, ext| ext.set("code", self.code()))
    }
}

/// Map a failed domain call onto the wire error shape.
pub(crate) fn gql_error(e: DomainError) -> async_graphql::Error {
    domain_to_api(e).extend()
}

/// An id that does not parse as a key cannot match any record.
pub(crate) fn unknown_id(raw: &str) -> async_graphql::Error {
    async_graphql::Error::new(format!("user not found: {raw}"))
        .extend_with(|_, ext| ext.set("code", "NOT_FOUND"))
}
