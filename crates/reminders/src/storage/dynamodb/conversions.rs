//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the wire record. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use reminders_core::reminder::Reminder;
use reminders_core::storage::RepositoryError;

use super::keys::{ATTR_PK, ATTR_SK};

/// Convert a Reminder to a DynamoDB item.
pub fn reminder_to_item(reminder: &Reminder) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(ATTR_PK.to_string(), AttributeValue::S(reminder.id.clone()));
    item.insert(
        ATTR_SK.to_string(),
        AttributeValue::S(reminder.title.clone()),
    );
    item
}

/// Convert a DynamoDB item to a Reminder.
pub fn item_to_reminder(
    item: &HashMap<String, AttributeValue>,
) -> Result<Reminder, RepositoryError> {
    Ok(Reminder {
        id: get_string(item, ATTR_PK)?,
        title: get_string(item, ATTR_SK)?,
    })
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::InvalidData(format!("missing string attribute: {key}")))
}
