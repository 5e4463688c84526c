use lambda_http::{Request, RequestExt};
use crate::utilities::fields::api;

const STAGE_PREFIXES: [&str; 2] = ["/dev", "/prod"];

/// The request path with any API Gateway stage prefix removed.
pub fn request_path(event: &Request) -> String {
    let raw_path = event.raw_http_path();
    let path: &str = if raw_path.is_empty() { event.uri().path() } else { &raw_path };

    STAGE_PREFIXES
        .iter()
        .find_map(|stage| path.strip_prefix(stage).filter(|rest| rest.starts_with('/')))
        .unwrap_or(path)
        .to_string()
}

/// Reads the `userId` path parameter, falling back to the `/users/{userId}`
/// path segment for invocations that bypass the gateway's path mapping.
pub fn extract_path_user_id(event: &Request) -> String {
    if let Some(user_id) = event
        .path_parameters_ref()
        .and_then(|params| params.first(api::USER_ID_PATH_PARAM))
    {
        return user_id.to_string();
    }

    request_path(event)
        .strip_prefix(api::USERS_PATH_PREFIX)
        .map(|rest| rest.trim_end_matches('/'))
        .filter(|segment| !segment.contains('/'))
        .unwrap_or_default()
        .to_string()
}

/// The raw `Authorization` header, or an empty string when absent or not UTF-8.
pub fn extract_authorization_header(event: &Request) -> &str {
    event.headers()
        .get(api::AUTHORIZATION_HEADER)
        .and_then(|header| header.to_str().ok())
        .unwrap_or_default()
}
