//! Request extractors for the artist routes.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

use super::error::ApiError;
use crate::model::ArtistInput;
use crate::ArtistError;

/// Artist fields from either a JSON or a url-encoded form body
///
/// An empty body yields an empty input, which then fails validation on the
/// missing name rather than as a parse error.
#[derive(Debug)]
pub struct ArtistPayload(pub ArtistInput);

impl<S> FromRequest<S> for ArtistPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ArtistError::InvalidBody(e.body_text()))?;
            return Ok(Self(ArtistInput::from_form_pairs(pairs)?));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ArtistError::InvalidBody(e.body_text()))?;
        if body.is_empty() {
            return Ok(Self(ArtistInput::default()));
        }

        let input = serde_json::from_slice(&body)
            .map_err(|e| ArtistError::InvalidBody(e.to_string()))?;
        Ok(Self(input))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}
