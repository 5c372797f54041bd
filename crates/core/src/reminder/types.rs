use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reminder as it travels over the wire.
///
/// The stored representation uses the same two fields, remapped onto the
/// table's key attributes by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
}

impl Reminder {
    /// Creates a reminder with the given title and a freshly generated
    /// identifier. Identifiers are assigned exactly once, here.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
        }
    }

    /// Sets a specific ID for this reminder (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
