use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::user_repository::{UserRepository, UserRepositoryError};
use crate::domain::users::user::{NewUser, User};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        description: row.try_get("description")?,
    })
}

fn classify(err: sqlx::Error) -> UserRepositoryError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return UserRepositoryError::Conflict;
        }
    }
    UserRepositoryError::Unexpected(err.into())
}

/// Escapes LIKE metacharacters so the input is matched literally.
pub(crate) fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn list(&self, limit: i64) -> Result<Vec<User>, UserRepositoryError> {
        let rows = sqlx::query(r#"SELECT id, name, email, description FROM users LIMIT $1"#)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;
        rows.iter()
            .map(map_user)
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, UserRepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, description FROM users
               WHERE name ILIKE '%' || $1 || '%' ESCAPE '\'"#,
        )
        .bind(escape_like(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;
        rows.iter()
            .map(map_user)
            .collect::<Result<Vec<_>, _>>()
            .map_err(classify)
    }

    async fn create(&self, user: &NewUser) -> Result<Uuid, UserRepositoryError> {
        let row = sqlx::query(
            r#"INSERT INTO users (name, email, description) VALUES ($1, $2, $3)
               RETURNING id"#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.description)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;
        row.try_get("id").map_err(classify)
    }

    async fn delete(&self, id: Uuid) -> Result<(), UserRepositoryError> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        if res.rows_affected() == 0 {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }
}
