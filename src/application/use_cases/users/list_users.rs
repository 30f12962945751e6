use crate::application::ports::user_repository::{UserRepository, UserRepositoryError};
use crate::domain::users::user::User;

pub struct ListUsers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
    pub limit: i64,
}

impl<'a, R: UserRepository + ?Sized> ListUsers<'a, R> {
    pub async fn execute(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.repo.list(self.limit).await
    }
}
