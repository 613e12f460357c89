//! Handler for short URL redirect.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::entities::ResponseDescriptor;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the request path to a redirect.
///
/// # Endpoint
///
/// `GET /{*path}` (and `GET /`)
///
/// The whole raw path is handed to the resolver, which strips every `/` to
/// form the short code.
///
/// # Responses
///
/// - **302 Found** with `Location` for a live link
/// - **410 Gone** with `This URL has expired.` for an expired link
///
/// # Errors
///
/// - **400** if the path contains no short code
/// - **404** if no record exists for the code
/// - **502** if the object store fails
/// - **500** if the stored record is malformed
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<ResponseDescriptor, AppError> {
    Ok(state.resolver.resolve(uri.path()).await?)
}

impl IntoResponse for ResponseDescriptor {
    fn into_response(self) -> Response {
        let Ok(status) = StatusCode::from_u16(self.status_code) else {
            return AppError::internal(
                "Invalid response status",
                json!({ "status": self.status_code }),
            )
            .into_response();
        };

        let mut response = match self.body {
            Some(body) => body.into_response(),
            None => Body::empty().into_response(),
        };
        *response.status_mut() = status;

        for (name, value) in self.headers.unwrap_or_default() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => {
                    return AppError::internal(
                        "Invalid response header",
                        json!({ "header": name }),
                    )
                    .into_response();
                }
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_redirect_into_response() {
        let response = ResponseDescriptor::redirect("https://example.com/sale").into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/sale"
        );
    }

    #[test]
    fn test_expired_into_response() {
        let response = ResponseDescriptor::expired().into_response();

        assert_eq!(response.status(), StatusCode::GONE);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[test]
    fn test_unencodable_location_is_500() {
        let response = ResponseDescriptor::redirect("https://example.com/\n").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
