use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;

pub mod error;
pub mod openapi;
pub mod users;
pub mod validation;

/// User routes plus the Swagger UI at `/docs` backed by `/openapi.json`.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(users::routes(ctx))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
        .fallback(route_not_found)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
