use lambda_http::{Body, Request, Response};
use scheduleme_shared::models::configuration::{Configuration, UserConfigurations};
use scheduleme_shared::models::errors::ApiError;
use scheduleme_shared::models::user::User;
use scheduleme_shared::repositories::configuration_repository::ConfigurationRepository;
use scheduleme_shared::repositories::user_repository::UserRepository;
use scheduleme_shared::utilities::authentication::with_user_id;
use scheduleme_shared::utilities::logging::{log_error, log_info};
use scheduleme_shared::utilities::requests::{extract_authorization_header, request_path};
use scheduleme_shared::utilities::responses::{default_headers, error_response_with_headers, response_with_headers};
use http::StatusCode;

/// Returns the caller's user record along with every configuration it owns.
/// The caller is identified by the `Authorization` header.
pub async fn handle_lambda<U, C>(
    users: &U,
    configurations: &C,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error>
where
    U: UserRepository + ?Sized,
    C: ConfigurationRepository + ?Sized,
{
    log::info!("Received request for path: {}", request_path(&event));
    let headers = default_headers();
    let auth_header = extract_authorization_header(&event);

    let result = with_user_id(auth_header, |user_id| async move {
        get_all_configurations(users, configurations, &user_id).await
    }).await;

    let response = match result {
        Ok(body) => {
            log_info("GetAllConfigurations", &format!(
                "user_id={} configurations={}", body.user.user_id, body.configurations.len()
            ));
            response_with_headers(&body, StatusCode::OK, headers.as_ref())
        }
        Err(err) => {
            if err.is_server_error() {
                log_error("GetAllConfigurations", &format!("{:?}", err));
            } else {
                log_info("GetAllConfigurations", &format!("rejected: {}", err));
            }
            error_response_with_headers(&err, headers.as_ref())
        }
    };
    Ok(response)
}

pub async fn get_all_configurations<U, C>(
    users: &U,
    configurations: &C,
    user_id: &str,
) -> Result<UserConfigurations, ApiError>
where
    U: UserRepository + ?Sized,
    C: ConfigurationRepository + ?Sized,
{
    let item = users.get_user(user_id).await?.ok_or(ApiError::UserNotFound)?;
    let user = User::from_item(&item)?;

    let items = configurations
        .query_by_owner(user_id)
        .await
        .map_err(ApiError::ConfigurationsUnavailable)?;

    Ok(UserConfigurations {
        user,
        configurations: Configuration::from_items(&items)?,
    })
}
