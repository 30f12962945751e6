use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::users::user::{NewUser, User};

/// Storage outcomes the HTTP layer needs to tell apart.
#[derive(thiserror::Error, Debug)]
pub enum UserRepositoryError {
    #[error("a user with this e-mail already exists")]
    Conflict,
    #[error("user not found")]
    NotFound,
    #[error("user storage failed")]
    Unexpected(#[source] anyhow::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, limit: i64) -> Result<Vec<User>, UserRepositoryError>;
    /// Case-insensitive substring match on `name`.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, UserRepositoryError>;
    async fn create(&self, user: &NewUser) -> Result<Uuid, UserRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), UserRepositoryError>;
}
