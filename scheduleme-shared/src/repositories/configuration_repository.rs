use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{debug, error};
use crate::database::attributes::Item;
use crate::database::errors::DynamoDbError;
use crate::utilities::fields::configurations;

#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Every configuration partitioned under `owner_id`, in sort-key order.
    /// An owner with no configurations yields an empty vector.
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Item>, DynamoDbError>;
}

pub struct DynamoConfigurationRepository {
    db: DynamoDbClient,
    table_name: String,
}

impl DynamoConfigurationRepository {
    pub fn new(db: DynamoDbClient, table_name: impl Into<String>) -> Self {
        Self { db, table_name: table_name.into() }
    }
}

#[async_trait]
impl ConfigurationRepository for DynamoConfigurationRepository {
    async fn query_by_owner(&self, owner_id: &str) -> Result<Vec<Item>, DynamoDbError> {
        let result = self
            .db
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#owner = :uid")
            .expression_attribute_names("#owner", configurations::OWNER_ID_FIELD)
            .expression_attribute_values(":uid", AttributeValue::S(owner_id.to_string()))
            .send()
            .await
            .map_err(|e| {
                let err = DynamoDbError::from(e);
                error!(table = %self.table_name, timeout = err.is_timeout(), error = ?err, "Query failed");
                err
            })?;

        let items = result.items.unwrap_or_default();
        debug!(table = %self.table_name, owner_id, count = items.len(), "Query returned");
        Ok(items)
    }
}
