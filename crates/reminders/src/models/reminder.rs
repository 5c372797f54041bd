use serde::Deserialize;

use reminders_core::reminder::Reminder;

/// Request payload for creating a new reminder.
///
/// Every field defaults to empty, so a malformed or absent body produces
/// an empty payload rather than a rejection. A client-supplied `id` is
/// dropped by serde and never reaches the store.
#[derive(Debug, Default, Deserialize)]
pub struct CreateReminder {
    #[serde(default)]
    pub title: String,
}

impl CreateReminder {
    /// Converts the create request into a Reminder, assigning it a fresh
    /// server-side identifier.
    pub fn into_reminder(self) -> Reminder {
        Reminder::new(self.title)
    }
}
