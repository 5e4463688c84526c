use lambda_http::{service_fn, Error, Request};
use scheduleme_get_configurations::handler::handle_lambda;
use scheduleme_shared::database::client::get_dynamodb_client;
use scheduleme_shared::repositories::configuration_repository::DynamoConfigurationRepository;
use scheduleme_shared::repositories::user_repository::DynamoUserRepository;
use scheduleme_shared::utilities::{config, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    std::panic::set_hook(Box::new(|info| {
        log::error!("Application panicked: {}", info);
    }));

    config::init();
    let client = get_dynamodb_client().await;
    let users = DynamoUserRepository::new(client.clone(), config::get_users_table());
    let configurations = DynamoConfigurationRepository::new(client.clone(), config::get_configurations_table());

    lambda_http::run(service_fn(|event: Request| handle_lambda(&users, &configurations, event))).await?;
    Ok(())
}
