#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use user_service::application::ports::user_repository::{UserRepository, UserRepositoryError};
use user_service::bootstrap::app_context::{AppContext, AppServices};
use user_service::bootstrap::config::Config;
use user_service::domain::users::user::{NewUser, User};
use user_service::presentation::http;

/// Keeps users in memory and enforces e-mail uniqueness like the database does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn insert(&self, name: &str, email: &str, description: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.users.lock().unwrap().push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            description: description.to_string(),
        });
        id
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, limit: i64) -> Result<Vec<User>, UserRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let users = self.users.lock().unwrap();
        Ok(users.iter().take(limit as usize).cloned().collect())
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, UserRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let needle = fragment.to_lowercase();
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, user: &NewUser) -> Result<Uuid, UserRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::Conflict);
        }
        let id = Uuid::new_v4();
        users.push(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            description: user.description.clone(),
        });
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), UserRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Fails every call the way an unreachable database would.
pub struct BrokenUserRepository;

fn broken() -> UserRepositoryError {
    UserRepositoryError::Unexpected(anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl UserRepository for BrokenUserRepository {
    async fn list(&self, _limit: i64) -> Result<Vec<User>, UserRepositoryError> {
        Err(broken())
    }

    async fn search_by_name(&self, _fragment: &str) -> Result<Vec<User>, UserRepositoryError> {
        Err(broken())
    }

    async fn create(&self, _user: &NewUser) -> Result<Uuid, UserRepositoryError> {
        Err(broken())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), UserRepositoryError> {
        Err(broken())
    }
}

pub fn app_with(repo: Arc<dyn UserRepository>, users_list_limit: i64) -> Router {
    let cfg = Config {
        users_list_limit,
        ..Config::default()
    };
    http::router(AppContext::new(cfg, AppServices::new(repo)))
}

pub fn app(repo: Arc<dyn UserRepository>) -> Router {
    app_with(repo, Config::default().users_list_limit)
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
