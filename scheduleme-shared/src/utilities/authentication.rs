use crate::models::errors::ApiError;

/// Extracts the user id from an `Authorization` header of the form
/// `<scheme> <token>`. The token is returned verbatim and is not verified.
/// Anything other than exactly two space-separated parts yields `""`.
pub fn get_user_id_from_auth_header(auth_header: &str) -> String {
    let parts: Vec<&str> = auth_header.split(' ').collect();
    match parts.as_slice() {
        [_scheme, token] => token.to_string(),
        _ => String::new(),
    }
}

/// Runs `action` with the user id carried by the header, or fails with
/// `MissingUserIdInToken` when there is none.
pub async fn with_user_id<F, Fut, R>(
    auth_header: &str,
    action: F
) -> Result<R, ApiError>
where
    F: FnOnce(String) -> Fut,
    Fut: std::future::Future<Output = Result<R, ApiError>>,
{
    let user_id = get_user_id_from_auth_header(auth_header);
    if user_id.is_empty() {
        log::info!("Rejecting request without a user id in the Authorization header");
        return Err(ApiError::MissingUserIdInToken);
    }
    action(user_id).await
}
