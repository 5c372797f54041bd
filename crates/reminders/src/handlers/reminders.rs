//! Request handlers for the reminder operations.
//!
//! Handlers never fail: store and serialization errors are folded into a
//! 500 envelope carrying the failure message, isolated to that request.

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};

use reminders_core::reminder::Reminder;

use crate::{app::Application, models::CreateReminder};

use super::response;

/// List all reminders (GET /reminders).
pub async fn list_reminders(app: &Application) -> ApiGatewayProxyResponse {
    let reminders = match app.reminders.list_reminders().await {
        Ok(reminders) => reminders,
        Err(err) => {
            return response::internal_server_error(format!(
                "failed to query all reminders: {err}"
            ))
        }
    };

    serialize_reminders(&reminders)
}

/// Get all reminders stored under one id (GET /reminders/{id}).
///
/// An id with no matches serializes to an empty array with a 200; there is
/// no 404 semantic on lookups.
pub async fn get_reminder(
    app: &Application,
    event: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    let id = event
        .path_parameters
        .get("id")
        .map(String::as_str)
        .unwrap_or_default();

    let reminders = match app.reminders.get_reminders_by_id(id).await {
        Ok(reminders) => reminders,
        Err(err) => {
            return response::internal_server_error(format!("failed to retrieve reminder: {err}"))
        }
    };

    serialize_reminders(&reminders)
}

/// Create a new reminder (POST /reminders).
pub async fn create_reminder(
    app: &Application,
    event: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    // A body that fails to parse is tolerated and treated as empty.
    let payload = event
        .body
        .as_deref()
        .and_then(|body| serde_json::from_str::<CreateReminder>(body).ok())
        .unwrap_or_default();

    let reminder = payload.into_reminder();

    match app.reminders.create_reminder(&reminder).await {
        Ok(()) => {
            tracing::info!(reminder_id = %reminder.id, "Created new reminder");
            response::ok("Reminder Insertion Success")
        }
        Err(err) => {
            tracing::error!(error = %err, "Reminder insertion failed");
            response::internal_server_error(format!("failed to create new reminder: {err}"))
        }
    }
}

/// Delete a reminder (DELETE /reminders/{id}).
///
/// Not implemented: acknowledges with fixed text and leaves the store
/// untouched.
pub async fn delete_reminder() -> ApiGatewayProxyResponse {
    response::ok("deleteReminder")
}

/// Update a reminder's status (PUT /reminders/status/{id}).
///
/// Not implemented: acknowledges with fixed text and leaves the store
/// untouched.
pub async fn update_reminder_status() -> ApiGatewayProxyResponse {
    response::ok("updateReminderStatus")
}

/// Update a reminder's flag (PUT /reminders/flag/{id}).
///
/// Not implemented: acknowledges with fixed text and leaves the store
/// untouched.
pub async fn update_reminder_flag() -> ApiGatewayProxyResponse {
    response::ok("updateReminderFlag")
}

/// Serializes a record set into the wire format: a pretty-printed JSON
/// array with two-space indentation. An empty set yields `[]`.
fn serialize_reminders(reminders: &[Reminder]) -> ApiGatewayProxyResponse {
    match serde_json::to_string_pretty(reminders) {
        Ok(body) => response::ok(body),
        Err(err) => {
            response::internal_server_error(format!("failed to serialize reminders: {err}"))
        }
    }
}
