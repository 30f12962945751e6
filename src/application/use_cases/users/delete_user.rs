use uuid::Uuid;

use crate::application::ports::user_repository::{UserRepository, UserRepositoryError};

pub struct DeleteUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> DeleteUser<'a, R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), UserRepositoryError> {
        self.repo.delete(id).await
    }
}
