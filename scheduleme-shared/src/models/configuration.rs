use serde::{Deserialize, Serialize};
use crate::database::attributes::{required_identifier, required_string, Item};
use crate::models::errors::RecordError;
use crate::models::user::User;
use crate::utilities::fields::configurations;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl Configuration {
    pub fn from_item(item: &Item) -> Result<Self, RecordError> {
        Ok(Configuration {
            id: required_identifier(item, configurations::ID_FIELD)?,
            name: required_string(item, configurations::NAME_FIELD)?,
            value: required_string(item, configurations::VALUE_FIELD)?,
        })
    }

    pub fn from_items(items: &[Item]) -> Result<Vec<Self>, RecordError> {
        items.iter().map(Configuration::from_item).collect()
    }
}

/// A user together with every configuration it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfigurations {
    pub user: User,
    pub configurations: Vec<Configuration>,
}
