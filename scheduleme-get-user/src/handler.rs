use lambda_http::{Body, Request, Response};
use scheduleme_shared::models::errors::ApiError;
use scheduleme_shared::models::user::User;
use scheduleme_shared::repositories::user_repository::UserRepository;
use scheduleme_shared::utilities::logging::{log_error, log_info};
use scheduleme_shared::utilities::requests::{extract_path_user_id, request_path};
use scheduleme_shared::utilities::responses::{default_headers, error_response_with_headers, response_with_headers};
use http::StatusCode;

/// `GET /users/{userId}`
pub async fn handle_lambda<R>(users: &R, event: Request) -> Result<Response<Body>, lambda_http::Error>
where
    R: UserRepository + ?Sized,
{
    log::info!("Received request for path: {}", request_path(&event));
    let headers = default_headers();
    let user_id = extract_path_user_id(&event);

    let response = match get_user(users, &user_id).await {
        Ok(user) => response_with_headers(&user, StatusCode::OK, headers.as_ref()),
        Err(err) => {
            if err.is_server_error() {
                log_error("GetUser", &format!("user_id={} {:?}", user_id, err));
            } else {
                log_info("GetUser", &format!("user_id={:?} rejected: {}", user_id, err));
            }
            error_response_with_headers(&err, headers.as_ref())
        }
    };
    Ok(response)
}

pub async fn get_user<R>(users: &R, user_id: &str) -> Result<User, ApiError>
where
    R: UserRepository + ?Sized,
{
    if user_id.is_empty() {
        return Err(ApiError::MissingUserId);
    }

    let item = users.get_user(user_id).await?.ok_or(ApiError::UserNotFound)?;
    Ok(User::from_item(&item)?)
}
