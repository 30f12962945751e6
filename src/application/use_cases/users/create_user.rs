use uuid::Uuid;

use crate::application::ports::user_repository::{UserRepository, UserRepositoryError};
use crate::domain::users::user::NewUser;

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub description: String,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, req: CreateUserRequest) -> Result<Uuid, UserRepositoryError> {
        let user = NewUser {
            name: req.name,
            email: req.email,
            description: req.description,
        };
        self.repo.create(&user).await
    }
}
