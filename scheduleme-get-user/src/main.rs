use lambda_http::{service_fn, Error, Request};
use scheduleme_get_user::handler::handle_lambda;
use scheduleme_shared::database::client::get_dynamodb_client;
use scheduleme_shared::repositories::user_repository::DynamoUserRepository;
use scheduleme_shared::utilities::{config, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let users = DynamoUserRepository::new(get_dynamodb_client().await.clone(), config::get_users_table());

    lambda_http::run(service_fn(|event: Request| handle_lambda(&users, event))).await?;
    Ok(())
}
