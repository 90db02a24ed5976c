use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    error::ApiError,
    extractor::{api_key::ApiKeyProvider, valid_api_key::ValidApiKey},
    state::ApiState,
};

/// Rejects requests without a valid API key when an API key is configured.
///
/// A missing key is rejected with `401`, an unknown key with `403`.
pub async fn validate_api_key(
    State(state): State<ApiState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.api_key_required() {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let ValidApiKey(used_api_key) = ValidApiKey::from_request_parts(&mut parts, &state).await?;

    tracing::debug!(?used_api_key, uri = %parts.uri, "Authorized");

    Ok(next.run(Request::from_parts(parts, body)).await)
}
