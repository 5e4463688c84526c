use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use thiserror::Error;

/// Failures raised by the DynamoDB client, carried unmodified so callers can
/// classify them (timeouts, throttling, access denied, ...).
#[derive(Debug, Error)]
pub enum DynamoDbError {
    #[error("DynamoDB GetItem error: {0}")]
    GetItem(#[from] SdkError<GetItemError>),

    #[error("DynamoDB Query error: {0}")]
    Query(#[from] SdkError<QueryError>),
}

impl DynamoDbError {
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DynamoDbError::GetItem(SdkError::TimeoutError(_)) | DynamoDbError::Query(SdkError::TimeoutError(_))
        )
    }
}
