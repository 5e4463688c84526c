use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;
use crate::models::errors::ApiError;
use crate::utilities::config;
use crate::utilities::logging::log_error;

/// Body sent when the payload itself cannot be serialized.
pub const INTERNAL_ERROR_BODY: &str = r#"{"message":"Internal server error"}"#;

#[derive(Debug, Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

pub fn success_response<T: Serialize>(data: &T) -> Response<Body> {
    response_with_code(data, StatusCode::OK)
}

pub fn error_response(err: &ApiError) -> Response<Body> {
    error_response_with_headers(err, None)
}

pub fn error_response_with_headers(err: &ApiError, headers: Option<&HeaderMap>) -> Response<Body> {
    let message = err.to_string();
    response_with_headers(&MessageBody { message: &message }, err.status_code(), headers)
}

pub fn response_with_code<T: Serialize>(data: &T, code: StatusCode) -> Response<Body> {
    response_with_headers(data, code, None)
}

/// Builds the response envelope. Never fails: a payload that cannot be
/// serialized becomes a fixed 500 envelope.
pub fn response_with_headers<T: Serialize>(
    data: &T,
    code: StatusCode,
    headers: Option<&HeaderMap>,
) -> Response<Body> {
    match serde_json::to_string(data) {
        Ok(body) => {
            log::info!("Response Code:{}\nBody: {}", code, body);
            envelope(code, body, headers)
        }
        Err(e) => {
            log_error("Serialization", &format!("Failed to serialize response body: {:?}", e));
            envelope(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY.to_string(), headers)
        }
    }
}

/// Headers added to every response, driven by configuration.
pub fn default_headers() -> Option<HeaderMap> {
    let origin = config::get_cors_allow_origin()?;
    match HeaderValue::from_str(&origin) {
        Ok(value) => Some(HeaderMap::from_iter([(ACCESS_CONTROL_ALLOW_ORIGIN, value)])),
        Err(e) => {
            log_error("Config", &format!("Invalid CORS_ALLOW_ORIGIN {:?}: {:?}", origin, e));
            None
        }
    }
}

fn envelope(code: StatusCode, body: String, headers: Option<&HeaderMap>) -> Response<Body> {
    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = code;

    let response_headers = response.headers_mut();
    if let Some(extra) = headers {
        for (name, value) in extra {
            response_headers.insert(name.clone(), value.clone());
        }
    }
    response_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
