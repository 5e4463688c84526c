use http::StatusCode;
use thiserror::Error;
use crate::database::errors::DynamoDbError;

/// A stored item that does not have the shape the read path expects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("attribute `{attribute}` has type {found}, expected {expected}")]
    UnexpectedType {
        attribute: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("identifier attribute `{0}` is empty")]
    EmptyIdentifier(&'static str),
}

/// Every way a request can fail. `Display` is the public message placed in
/// the response body; internal detail is only reachable through `Debug`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("userId is required")]
    MissingUserId,

    #[error("Forbidden: No user id in token")]
    MissingUserIdInToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Failed to get configurations")]
    ConfigurationsUnavailable(#[source] DynamoDbError),

    #[error("Internal server error")]
    Store(#[from] DynamoDbError),

    #[error("Internal server error")]
    CorruptRecord(#[from] RecordError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUserId => StatusCode::BAD_REQUEST,
            ApiError::MissingUserIdInToken => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::ConfigurationsUnavailable(_)
            | ApiError::Store(_)
            | ApiError::CorruptRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::SdkError;
    use aws_sdk_dynamodb::operation::query::QueryError;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(ApiError::MissingUserId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingUserIdInToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn corrupt_records_hide_detail_from_callers() {
        let err = ApiError::from(RecordError::MissingAttribute("username"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
        assert!(format!("{:?}", err).contains("username"));
    }

    #[test]
    fn configuration_failures_have_their_own_message() {
        let source = DynamoDbError::from(SdkError::<QueryError>::timeout_error("deadline exceeded"));
        let err = ApiError::ConfigurationsUnavailable(source);
        assert!(err.is_server_error());
        assert_eq!(err.to_string(), "Failed to get configurations");
    }
}
