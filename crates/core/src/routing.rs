//! Method + resource dispatch for the reminders API.
//!
//! The gateway hands the handler the resource template it matched (path
//! placeholders unresolved), so dispatch is an exact string match on the
//! (method, template) pair. This follows the Functional Core pattern -
//! a pure lookup with no side effects, testable without any transport.

/// Gateway resource template for the reminder collection.
pub const RES_REMINDERS: &str = "/reminders";
/// Gateway resource template for a single reminder.
pub const RES_A_REMINDER: &str = "/reminders/{id}";
/// Gateway resource template for a reminder's status.
pub const RES_REMINDER_STATUS: &str = "/reminders/status/{id}";
/// Gateway resource template for a reminder's flag.
pub const RES_REMINDER_FLAG: &str = "/reminders/flag/{id}";

/// An operation the API dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ListReminders,
    GetReminder,
    CreateReminder,
    UpdateReminderStatus,
    UpdateReminderFlag,
    DeleteReminder,
}

impl Route {
    /// Resolves a method and gateway resource template to an operation.
    ///
    /// Both parts must match exactly: a known resource with the wrong
    /// method resolves to `None`, same as an unknown resource.
    pub fn resolve(method: &str, resource: &str) -> Option<Route> {
        match (method, resource) {
            ("GET", RES_REMINDERS) => Some(Route::ListReminders),
            ("GET", RES_A_REMINDER) => Some(Route::GetReminder),
            ("POST", RES_REMINDERS) => Some(Route::CreateReminder),
            ("PUT", RES_REMINDER_STATUS) => Some(Route::UpdateReminderStatus),
            ("PUT", RES_REMINDER_FLAG) => Some(Route::UpdateReminderFlag),
            ("DELETE", RES_A_REMINDER) => Some(Route::DeleteReminder),
            _ => None,
        }
    }
}
