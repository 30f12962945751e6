use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::user_repository::UserRepositoryError;
use crate::application::use_cases::users::create_user::{CreateUser, CreateUserRequest};
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::application::use_cases::users::search_users::SearchUsers;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::{DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS, User};
use crate::presentation::http::error::{ApiError, MessageResponse};
use crate::presentation::http::validation::{
    self, Validate, ValidatedJson, ValidatedPath, ValidationError,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub description: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            name: u.name,
            email: u.email,
            description: u.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserBody {
    #[schema(max_length = 150)]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(max_length = 600)]
    pub description: String,
}

impl Validate for CreateUserBody {
    type Valid = CreateUserRequest;

    fn validate(self) -> Result<CreateUserRequest, ValidationError> {
        validation::max_chars("name", &self.name, NAME_MAX_CHARS)?;
        validation::email("email", &self.email)?;
        validation::max_chars("description", &self.description, DESCRIPTION_MAX_CHARS)?;
        Ok(CreateUserRequest {
            name: self.name,
            email: self.email,
            description: self.description,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UserNamePath(String);

impl Validate for UserNamePath {
    type Valid = String;

    fn validate(self) -> Result<String, ValidationError> {
        validation::max_chars("name", &self.0, NAME_MAX_CHARS)?;
        Ok(self.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UserIdPath(String);

impl Validate for UserIdPath {
    type Valid = Uuid;

    fn validate(self) -> Result<Uuid, ValidationError> {
        validation::uuid("id", &self.0)
    }
}

pub fn routes(ctx: AppContext) -> Router {
    // Search and delete share one capture: the router rejects two differently
    // named captures at the same position.
    Router::new()
        .route("/users", get(list_users).fallback(method_not_allowed))
        .route("/user", post(create_user).fallback(method_not_allowed))
        .route(
            "/user/",
            get(search_all_users)
                .delete(delete_without_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/user/:key",
            get(search_users)
                .delete(delete_user)
                .fallback(method_not_allowed),
        )
        .with_state(ctx)
}

/// Requery all Users
#[utoipa::path(get, path = "/users", tag = "users", responses(
    (status = 200, body = [UserResponse]),
    (status = 404, body = MessageResponse),
    (status = 500, body = MessageResponse)
))]
pub async fn list_users(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
        limit: ctx.cfg.users_list_limit,
    };
    let users = uc.execute().await.map_err(|e| {
        tracing::error!(error = ?e, "list_users_failed");
        ApiError::internal("Server ERROR")
    })?;
    if users.is_empty() {
        return Err(ApiError::not_found("Don't have Users"));
    }
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Return One User
///
/// Matches every user whose name contains `name`, ignoring case.
#[utoipa::path(get, path = "/user/{name}", tag = "users",
    params(("name" = String, Path, description = "User Name, at most 150 characters")),
    responses(
        (status = 200, body = [UserResponse]),
        (status = 400, body = MessageResponse),
        (status = 404, body = MessageResponse),
        (status = 500, body = MessageResponse)
    ))]
pub async fn search_users(
    State(ctx): State<AppContext>,
    ValidatedPath(name): ValidatedPath<UserNamePath>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    run_search(&ctx, &name).await
}

/// An empty name segment matches every user.
async fn search_all_users(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    run_search(&ctx, "").await
}

async fn run_search(ctx: &AppContext, name: &str) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let repo = ctx.user_repo();
    let uc = SearchUsers {
        repo: repo.as_ref(),
    };
    let users = uc.execute(name).await.map_err(|e| {
        tracing::error!(%name, error = ?e, "search_users_failed");
        ApiError::internal("Server error")
    })?;
    if users.is_empty() {
        return Err(ApiError::not_found("User not found"));
    }
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Create a new User
#[utoipa::path(post, path = "/user", tag = "users", request_body = CreateUserBody, responses(
    (status = 201, body = MessageResponse),
    (status = 400, body = MessageResponse),
    (status = 409, body = MessageResponse),
    (status = 500, body = MessageResponse)
))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    ValidatedJson(req): ValidatedJson<CreateUserBody>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let repo = ctx.user_repo();
    let uc = CreateUser {
        repo: repo.as_ref(),
    };
    match uc.execute(req).await {
        Ok(id) => {
            tracing::info!(user_id = %id, "user_created");
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("User created successfully")),
            ))
        }
        Err(UserRepositoryError::Conflict) => Err(ApiError::conflict("E-mail already exist.")),
        Err(e) => {
            tracing::error!(error = ?e, "create_user_failed");
            Err(ApiError::internal("The user was not created"))
        }
    }
}

/// Delete one user by ID
#[utoipa::path(delete, path = "/user/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = MessageResponse),
        (status = 404, body = MessageResponse),
        (status = 500, body = MessageResponse)
    ))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    ValidatedPath(id): ValidatedPath<UserIdPath>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = DeleteUser {
        repo: repo.as_ref(),
    };
    match uc.execute(id).await {
        Ok(()) => Ok(Json(MessageResponse::new("User deleted successfully"))),
        Err(UserRepositoryError::NotFound) => Err(ApiError::not_found("User not found")),
        Err(e) => {
            tracing::error!(user_id = %id, error = ?e, "delete_user_failed");
            Err(ApiError::internal("Server error"))
        }
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn delete_without_id() -> ApiError {
    ValidationError::new("id", "must be a UUID").into()
}
