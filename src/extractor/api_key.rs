use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{
    error::{ApiError, ApiKeyError, ApiKeyErrorType, ErrorVerbosityProvider},
    types::used_api_key::UsedApiKey,
};

pub trait ApiKeyProvider {
    /// Returns whether requests to protected routes must carry an API key.
    fn api_key_required(&self) -> bool;

    /// Returns the API key header name.
    fn header_name(&self) -> &str;

    /// Validates the API key.
    fn validate(&self, key: &str) -> bool;
}

/// Extracts the API key from the request headers.
///
/// The API key is not validated. See [`ValidApiKey`](super::valid_api_key::ValidApiKey).
#[derive(Debug, Clone)]
pub struct ApiKey(pub UsedApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync + ApiKeyProvider + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "api_key_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verbosity = state.error_verbosity();

        let header_name = state.header_name();

        let api_key = parts
            .headers
            .get(header_name)
            .ok_or_else(|| {
                tracing::warn!(%header_name, "Rejection. API key not found");

                ApiKeyError::new(verbosity, ApiKeyErrorType::Missing)
            })?
            .to_str()
            .map_err(|err| {
                tracing::warn!(%err, "Rejection. API key contains invalid characters");

                ApiKeyError::new(
                    verbosity,
                    ApiKeyErrorType::InvalidChars {
                        reason: err.to_string(),
                    },
                )
            })?
            .to_string();

        Ok(ApiKey(UsedApiKey { api_key }))
    }
}
