use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, error};
use crate::database::attributes::Item;
use crate::database::errors::DynamoDbError;
use crate::utilities::fields::users;

/// Interface
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point lookup by user id. `Ok(None)` when no item has that key.
    async fn get_user(&self, user_id: &str) -> Result<Option<Item>, DynamoDbError>;
}

/// DynamoDB-backed implementation
pub struct DynamoUserRepository {
    db: DynamoDbClient,
    table_name: String,
}

impl DynamoUserRepository {
    pub fn new(db: DynamoDbClient, table_name: impl Into<String>) -> Self {
        Self { db, table_name: table_name.into() }
    }
}

#[async_trait]
impl UserRepository for DynamoUserRepository {
    async fn get_user(&self, user_id: &str) -> Result<Option<Item>, DynamoDbError> {
        debug!(table = %self.table_name, user_id, "GetItem");

        let res = self
            .db
            .get_item()
            .table_name(&self.table_name)
            .key(users::USER_ID_FIELD, AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(|e| {
                let err = DynamoDbError::from(e);
                error!(table = %self.table_name, timeout = err.is_timeout(), error = ?err, "GetItem failed");
                err
            })?;

        Ok(res.item)
    }
}
