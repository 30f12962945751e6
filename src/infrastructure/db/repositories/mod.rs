pub mod user_repository_sqlx;
