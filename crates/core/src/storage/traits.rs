use async_trait::async_trait;

use crate::reminder::Reminder;

use super::Result;

/// Repository for reminder persistence.
///
/// Backends key stored items on the (id, title) pair: the id is the
/// partition key and the title the sort key, so a lookup by id alone can
/// legitimately return more than one record.
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Persists a fully populated reminder (id already assigned) as a new
    /// stored item. An identical (id, title) pair is overwritten in place.
    async fn create_reminder(&self, reminder: &Reminder) -> Result<()>;

    /// Returns every stored reminder, following the backend's pagination
    /// protocol until exhausted. A failure on any page aborts the whole
    /// read; no partial result is returned.
    async fn list_reminders(&self) -> Result<Vec<Reminder>>;

    /// Returns all stored reminders whose partition key equals `id`.
    /// An id with no matches yields an empty vector, not an error.
    async fn get_reminders_by_id(&self, id: &str) -> Result<Vec<Reminder>>;
}
