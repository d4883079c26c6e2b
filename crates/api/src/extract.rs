//! Custom Axum extractors for the movie routes.

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Json;
use marquee_core::movie::MovieInput;
use marquee_core::types::MovieId;

use crate::error::AppError;

/// Movie identifier taken from the `{id}` path segment.
///
/// A segment that is not a UUID is rejected with 400 before any storage
/// call is made.
pub struct MovieIdPath(pub MovieId);

impl<S> FromRequestParts<S> for MovieIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let id = MovieId::parse_str(&raw)
            .map_err(|_| AppError::BadRequest(format!("Invalid movie id: {raw}")))?;

        Ok(Self(id))
    }
}

/// Create/update body, accepted as JSON or as a URL-encoded form.
///
/// Undecodable bodies are reported as 400 with the decoder's message.
pub struct MovieBody(pub MovieInput);

impl<S> FromRequest<S> for MovieBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let input = if is_form(&req) {
            let Form(input) = Form::<MovieInput>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            input
        } else {
            let Json(input) = Json::<MovieInput>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            input
        };

        Ok(Self(input))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}
