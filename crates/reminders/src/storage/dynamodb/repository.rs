//! DynamoDB repository implementation.
//!
//! Implements `ReminderRepository` from `reminders_core::storage` using
//! DynamoDB: a put per insert, a projected scan for list-all, and a
//! key-condition query for lookup by id. Reads drive the SDK paginator
//! until it reports no more pages; a failed page aborts the whole read.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use reminders_core::reminder::Reminder;
use reminders_core::storage::{ReminderRepository, Result};

use super::conversions::{item_to_reminder, reminder_to_item};
use super::error::{map_put_item_error, map_query_error, map_scan_error};
use super::keys::{ATTR_PK, ATTR_SK};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table
    /// name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ReminderRepository for DynamoDbRepository {
    async fn create_reminder(&self, reminder: &Reminder) -> Result<()> {
        let item = reminder_to_item(reminder);

        // No condition expression: the primary key is the (id, title)
        // pair, so an identical pair overwrites in place.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn list_reminders(&self) -> Result<Vec<Reminder>> {
        // Project only the key attributes; they carry the whole record.
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table_name)
            .projection_expression("#pk, #sk")
            .expression_attribute_names("#pk", ATTR_PK)
            .expression_attribute_names("#sk", ATTR_SK)
            .into_paginator()
            .send();

        let mut reminders = Vec::new();
        while let Some(page) = pages.try_next().await.map_err(map_scan_error)? {
            for item in page.items() {
                reminders.push(item_to_reminder(item)?);
            }
        }

        Ok(reminders)
    }

    async fn get_reminders_by_id(&self, id: &str) -> Result<Vec<Reminder>> {
        let mut pages = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :id")
            .expression_attribute_names("#pk", ATTR_PK)
            .expression_attribute_values(":id", AttributeValue::S(id.to_string()))
            .into_paginator()
            .send();

        let mut reminders = Vec::new();
        while let Some(page) = pages.try_next().await.map_err(map_query_error)? {
            for item in page.items() {
                reminders.push(item_to_reminder(item)?);
            }
        }

        Ok(reminders)
    }
}
