use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "britorossi Api", version = "1.0.0"),
    paths(
        crate::presentation::http::users::list_users,
        crate::presentation::http::users::search_users,
        crate::presentation::http::users::create_user,
        crate::presentation::http::users::delete_user,
    ),
    components(schemas(
        crate::presentation::http::users::UserResponse,
        crate::presentation::http::users::CreateUserBody,
        crate::presentation::http::error::MessageResponse,
    )),
    tags(
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_user_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in ["/users", "/user", "/user/{name}", "/user/{id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn declares_not_found_on_delete() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let responses = &doc["paths"]["/user/{id}"]["delete"]["responses"];
        assert!(responses.get("404").is_some());
        assert!(responses.get("200").is_some());
    }
}
