use std::collections::HashMap;
use aws_sdk_dynamodb::types::AttributeValue;
use crate::models::errors::RecordError;

/// A raw item as returned by GetItem or Query.
pub type Item = HashMap<String, AttributeValue>;

const STRING_TYPE: &str = "S";

/// Reads a string attribute that every well-formed item carries.
pub fn required_string(item: &Item, attribute: &'static str) -> Result<String, RecordError> {
    let value = item.get(attribute).ok_or(RecordError::MissingAttribute(attribute))?;
    as_string(value, attribute)
}

/// Like [`required_string`], additionally rejecting an empty value.
pub fn required_identifier(item: &Item, attribute: &'static str) -> Result<String, RecordError> {
    let value = required_string(item, attribute)?;
    if value.is_empty() {
        return Err(RecordError::EmptyIdentifier(attribute));
    }
    Ok(value)
}

/// Reads a string attribute that may be absent. `NULL` and empty strings
/// count as absent; any other non-string type is a fault.
pub fn optional_string(item: &Item, attribute: &'static str) -> Result<Option<String>, RecordError> {
    match item.get(attribute) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(value) => as_string(value, attribute).map(|s| Some(s).filter(|s| !s.is_empty())),
    }
}

fn as_string(value: &AttributeValue, attribute: &'static str) -> Result<String, RecordError> {
    value
        .as_s()
        .map(String::clone)
        .map_err(|other| RecordError::UnexpectedType {
            attribute,
            expected: STRING_TYPE,
            found: type_name(other),
        })
}

fn type_name(value: &AttributeValue) -> &'static str {
    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::B(_) => "B",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::Ss(_) => "SS",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Bs(_) => "BS",
        AttributeValue::L(_) => "L",
        AttributeValue::M(_) => "M",
        _ => "unknown",
    }
}
