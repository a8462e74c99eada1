//! JSON body extractor.
//!
//! Parses request bodies into typed payloads. Unlike `axum::Json`, failures
//! are rendered as the JSON error envelope instead of plain text.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for JSON request bodies.
///
/// A missing `Content-Type` header is treated as JSON.
///
/// # Example
///
/// ```rust,ignore
/// use trivia_rest::extractors::JsonBody;
///
/// async fn search_handler(JsonBody(request): JsonBody<SearchRequest>) {
///     println!("Searching for {}", request.search_term);
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    /// Consumes the extractor and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error type for JSON body extraction failures.
#[derive(Debug)]
pub enum JsonBodyRejection {
    /// The body could not be read or parsed.
    InvalidJson(String),
    /// The request declared a non-JSON content type.
    UnsupportedMediaType(String),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            JsonBodyRejection::InvalidJson(msg) => {
                RestError::bad_request(format!("Invalid JSON: {}", msg))
            }
            JsonBodyRejection::UnsupportedMediaType(ct) => {
                RestError::bad_request(format!("Content type '{}' is not supported", ct))
            }
        };
        error.into_response()
    }
}

/// Returns true for `application/json` and `application/*+json`, ignoring
/// parameters such as `charset`.
fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_media_type(&content_type) {
            return Err(JsonBodyRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonBodyRejection::InvalidJson(e.to_string()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| JsonBodyRejection::InvalidJson(e.to_string()))?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_typed_payload() {
        let JsonBody(payload) = JsonBody::<Payload>::from_request(json_request(r#"{"name":"quiz"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.name, "quiz");
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let err = JsonBody::<Payload>::from_request(json_request(""), &())
            .await
            .unwrap_err();
        assert!(matches!(err, JsonBodyRejection::InvalidJson(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_json_content_type_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("name=quiz"))
            .unwrap();
        let err = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, JsonBodyRejection::UnsupportedMediaType(_)));
    }

    #[tokio::test]
    async fn test_json_lookalike_content_type_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "text/notjson")
            .body(Body::from(r#"{"name":"quiz"}"#))
            .unwrap();
        let err = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, JsonBodyRejection::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_json_media_types() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("application/json; charset=utf-8"));
        assert!(is_json_media_type("Application/JSON"));
        assert!(is_json_media_type("application/problem+json"));
        assert!(!is_json_media_type("text/notjson"));
        assert!(!is_json_media_type("application/jsonp"));
        assert!(!is_json_media_type("json"));
    }
}
