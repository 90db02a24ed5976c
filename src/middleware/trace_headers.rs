use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::extractor::api_key::ApiKeyProvider;

/// Middlware to trace incoming and outgoing headers.
///
/// The value of the API key header is masked.
pub async fn trace_headers<S: ApiKeyProvider>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Response {
    let incoming_headers = masked(req.headers(), state.header_name());
    tracing::trace!(?incoming_headers, "Headers");

    let response = next.run(req).await;

    let outgoing_headers = response.headers();
    tracing::trace!(?outgoing_headers, "Headers");

    response
}

fn masked(headers: &HeaderMap, header_name: &str) -> HeaderMap {
    let mut headers = headers.clone();

    if let Some(value) = headers.get_mut(header_name) {
        *value = HeaderValue::from_static("...");
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_only_the_api_key_header() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("VerySecret"));
        headers.insert("host", HeaderValue::from_static("localhost"));

        let masked = masked(&headers, "Authorization");

        assert_eq!(masked["authorization"], "...");
        assert_eq!(masked["host"], "localhost");
    }
}
