//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use reminders_core::reminder::Reminder;
use reminders_core::storage::{ReminderRepository, Result};

/// In-memory storage backend for testing.
///
/// Keys its map on the same (id, title) pair the table keys on, so the
/// uniqueness invariant matches the deployed backend. Data is not
/// persisted and is lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    reminders: Arc<RwLock<HashMap<(String, String), Reminder>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            reminders: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ReminderRepository for InMemoryRepository {
    async fn create_reminder(&self, reminder: &Reminder) -> Result<()> {
        let mut reminders = self.reminders.write().await;
        reminders.insert(
            (reminder.id.clone(), reminder.title.clone()),
            reminder.clone(),
        );
        Ok(())
    }

    async fn list_reminders(&self) -> Result<Vec<Reminder>> {
        let reminders = self.reminders.read().await;
        Ok(reminders.values().cloned().collect())
    }

    async fn get_reminders_by_id(&self, id: &str) -> Result<Vec<Reminder>> {
        let reminders = self.reminders.read().await;
        Ok(reminders
            .values()
            .filter(|reminder| reminder.id == id)
            .cloned()
            .collect())
    }
}
