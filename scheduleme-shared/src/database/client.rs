use aws_config::timeout::TimeoutConfig;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use tokio::sync::OnceCell;
use crate::utilities::config;

static DYNAMODB_CLIENT: OnceCell<DynamoDbClient> = OnceCell::const_new();

/// Returns the process-wide client, building it on first use. Warm
/// invocations reuse the same connection pool.
pub async fn get_dynamodb_client() -> &'static DynamoDbClient {
    DYNAMODB_CLIENT
        .get_or_init(|| async {
            let timeouts = TimeoutConfig::builder()
                .operation_timeout(config::get_store_operation_timeout())
                .build();
            let sdk_config = aws_config::from_env().timeout_config(timeouts).load().await;
            log::info!("DynamoDB client initialised");
            DynamoDbClient::new(&sdk_config)
        })
        .await
}
