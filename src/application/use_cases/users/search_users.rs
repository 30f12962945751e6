use crate::application::ports::user_repository::{UserRepository, UserRepositoryError};
use crate::domain::users::user::User;

pub struct SearchUsers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> SearchUsers<'a, R> {
    pub async fn execute(&self, name: &str) -> Result<Vec<User>, UserRepositoryError> {
        self.repo.search_by_name(name).await
    }
}
