//! Extractors that answer malformed inputs with structured validation errors.
//!
//! The stock Axum extractors reject with plain-text bodies and a mix of
//! status codes. These wrappers keep the declared-type semantics but turn
//! every path, query, or body validation failure into a
//! `422 Unprocessable Entity` carrying the standard error envelope. The
//! handler body never runs for such a request.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::models::ErrorResponse;

/// Path extractor with a structured 422 rejection.
#[derive(Debug)]
pub struct Path<T>(pub T);

/// Query extractor with a structured 422 rejection.
#[derive(Debug)]
pub struct Query<T>(pub T);

/// JSON body extractor with a structured 422 rejection.
///
/// Also usable as a response type, like `axum::Json`.
#[derive(Debug)]
pub struct Json<T>(pub T);

/// Rejection produced when an input fails its declared type.
#[derive(Debug)]
pub struct ValidationRejection(pub String);

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(ErrorResponse {
                success: false,
                error: self.0,
            }),
        )
            .into_response()
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationRejection(rejection.body_text())),
        }
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationRejection(rejection.body_text())),
        }
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationRejection(rejection.body_text())),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
