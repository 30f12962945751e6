//! Request-shape checks run by extractors, before any handler logic.
//!
//! A request type implements [`Validate`] to turn its raw deserialized form
//! into the value the handler works with. [`ValidatedJson`] and
//! [`ValidatedPath`] reject with `{"message": ...}` when either
//! deserialization or validation fails: 400 for a malformed or invalid value,
//! otherwise the status of the underlying axum rejection (415 for a missing
//! content type).

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::presentation::http::error::ApiError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("valid email regex")
});

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, ValidationError>;
}

/// Lengths are measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.encode_utf16().count() > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let well_formed =
        !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value);
    if !well_formed {
        return Err(ValidationError::new(field, "must be a valid e-mail address"));
    }
    Ok(())
}

/// Accepts only the canonical hyphenated form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
pub fn uuid(field: &'static str, value: &str) -> Result<Uuid, ValidationError> {
    if value.len() != 36 {
        return Err(ValidationError::new(field, "must be a UUID"));
    }
    Uuid::try_parse(value).map_err(|_| ValidationError::new(field, "must be a UUID"))
}

/// Body that parses but does not fit the declared shape is a plain 400, like a
/// failed [`Validate`] check. Content-type and size rejections keep their own status.
fn json_rejection_status(rej: &JsonRejection) -> StatusCode {
    match rej {
        JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
        other => other.status(),
    }
}

pub struct ValidatedJson<T: Validate>(pub T::Valid);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rej| ApiError::new(json_rejection_status(&rej), rej.body_text()))?;
        Ok(Self(raw.validate()?))
    }
}

pub struct ValidatedPath<T: Validate>(pub T::Valid);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rej| ApiError::new(rej.status(), rej.body_text()))?;
        Ok(Self(raw.validate()?))
    }
}
