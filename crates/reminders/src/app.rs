//! Application context and request dispatch.
//!
//! The context owns the configuration and the repository; handlers get
//! both injected rather than reaching for ambient state, so tests can
//! swap in the in-memory backend.

use std::sync::Arc;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};

use reminders_core::routing::Route;
use reminders_core::storage::ReminderRepository;

use crate::{
    config::AppConfig,
    handlers::{reminders, response},
    storage::dynamodb::DynamoDbRepository,
};

/// Shared application context, built once per execution environment.
pub struct Application {
    pub config: AppConfig,
    pub reminders: Arc<dyn ReminderRepository>,
}

impl Application {
    /// Creates an application with the given configuration and repository.
    pub fn new(config: AppConfig, reminders: Arc<dyn ReminderRepository>) -> Self {
        Self { config, reminders }
    }

    /// Creates an application from environment configuration, backed by
    /// DynamoDB through the AWS SDK default credential chain.
    pub async fn from_env() -> Self {
        let config = AppConfig::from_env();

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;
        let client = aws_sdk_dynamodb::Client::new(&sdk_config);
        let repository = DynamoDbRepository::new(client, &config.table_name);

        Self::new(config, Arc::new(repository))
    }

    /// Dispatches one gateway event to its operation handler.
    ///
    /// A (method, resource) pair outside the dispatch table answers 404
    /// "Not Supported"; it is not an error condition.
    pub async fn handle_routes(&self, event: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        let method = event.http_method.as_str();
        let resource = event.resource.as_deref().unwrap_or_default();

        match Route::resolve(method, resource) {
            Some(Route::ListReminders) => reminders::list_reminders(self).await,
            Some(Route::GetReminder) => reminders::get_reminder(self, &event).await,
            Some(Route::CreateReminder) => reminders::create_reminder(self, &event).await,
            Some(Route::UpdateReminderStatus) => reminders::update_reminder_status().await,
            Some(Route::UpdateReminderFlag) => reminders::update_reminder_flag().await,
            Some(Route::DeleteReminder) => reminders::delete_reminder().await,
            None => response::not_supported("Not Supported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use aws_lambda_events::encodings::Body;
    use aws_lambda_events::http::Method;

    use reminders_core::reminder::Reminder;
    use reminders_core::routing::{
        RES_A_REMINDER, RES_REMINDERS, RES_REMINDER_FLAG, RES_REMINDER_STATUS,
    };

    use crate::storage::inmemory::InMemoryRepository;

    fn test_app() -> (Application, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        let config = AppConfig {
            table_name: "Reminders".to_string(),
            aws_region: "us-east-1".to_string(),
        };
        (Application::new(config, Arc::new(repo.clone())), repo)
    }

    fn request(method: Method, resource: &str) -> ApiGatewayProxyRequest {
        ApiGatewayProxyRequest {
            http_method: method,
            resource: Some(resource.to_string()),
            ..Default::default()
        }
    }

    fn request_with_body(method: Method, resource: &str, body: &str) -> ApiGatewayProxyRequest {
        ApiGatewayProxyRequest {
            body: Some(body.to_string()),
            ..request(method, resource)
        }
    }

    fn request_with_id(method: Method, resource: &str, id: &str) -> ApiGatewayProxyRequest {
        ApiGatewayProxyRequest {
            path_parameters: HashMap::from([("id".to_string(), id.to_string())]),
            ..request(method, resource)
        }
    }

    fn body_text(response: &ApiGatewayProxyResponse) -> &str {
        match response.body {
            Some(Body::Text(ref text)) => text,
            _ => panic!("expected a text body"),
        }
    }

    #[tokio::test]
    async fn test_post_then_list_round_trip() {
        let (app, _) = test_app();

        let created = app
            .handle_routes(request_with_body(
                Method::POST,
                RES_REMINDERS,
                r#"{"title":"Call dentist"}"#,
            ))
            .await;
        assert_eq!(created.status_code, 200);
        assert_eq!(body_text(&created), "Reminder Insertion Success");

        let listed = app.handle_routes(request(Method::GET, RES_REMINDERS)).await;
        assert_eq!(listed.status_code, 200);

        let reminders: Vec<Reminder> = serde_json::from_str(body_text(&listed)).unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].title, "Call dentist");
        assert!(!reminders[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_list_body_is_pretty_printed() {
        let (app, repo) = test_app();
        repo.create_reminder(&Reminder::new("Buy milk"))
            .await
            .unwrap();

        let listed = app.handle_routes(request(Method::GET, RES_REMINDERS)).await;
        let body = body_text(&listed);

        // Two-space indentation, one field per line.
        assert!(body.starts_with("[\n  {\n    \""));
    }

    #[tokio::test]
    async fn test_list_empty_store_yields_empty_array() {
        let (app, _) = test_app();

        let listed = app.handle_routes(request(Method::GET, RES_REMINDERS)).await;
        assert_eq!(listed.status_code, 200);
        assert_eq!(body_text(&listed), "[]");
    }

    #[tokio::test]
    async fn test_get_by_returned_id_round_trips() {
        let (app, repo) = test_app();

        app.handle_routes(request_with_body(
            Method::POST,
            RES_REMINDERS,
            r#"{"title":"Buy milk"}"#,
        ))
        .await;
        let stored = repo.list_reminders().await.unwrap();
        let id = stored[0].id.clone();

        let fetched = app
            .handle_routes(request_with_id(Method::GET, RES_A_REMINDER, &id))
            .await;
        assert_eq!(fetched.status_code, 200);

        let reminders: Vec<Reminder> = serde_json::from_str(body_text(&fetched)).unwrap();
        assert_eq!(reminders, vec![Reminder::new("Buy milk").with_id(id)]);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_empty_array_not_404() {
        let (app, _) = test_app();

        let fetched = app
            .handle_routes(request_with_id(Method::GET, RES_A_REMINDER, "unknown-id"))
            .await;
        assert_eq!(fetched.status_code, 200);
        assert_eq!(body_text(&fetched), "[]");
    }

    #[tokio::test]
    async fn test_get_without_path_parameter_is_empty_array() {
        let (app, _) = test_app();

        let fetched = app
            .handle_routes(request(Method::GET, RES_A_REMINDER))
            .await;
        assert_eq!(fetched.status_code, 200);
        assert_eq!(body_text(&fetched), "[]");
    }

    #[tokio::test]
    async fn test_create_ignores_client_supplied_id() {
        let (app, repo) = test_app();

        app.handle_routes(request_with_body(
            Method::POST,
            RES_REMINDERS,
            r#"{"id":"client-id","title":"Buy milk"}"#,
        ))
        .await;

        let stored = repo.list_reminders().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0].id, "client-id");
    }

    #[tokio::test]
    async fn test_created_ids_are_unique_across_calls() {
        let (app, repo) = test_app();

        for _ in 0..3 {
            app.handle_routes(request_with_body(
                Method::POST,
                RES_REMINDERS,
                r#"{"title":"same title"}"#,
            ))
            .await;
        }

        let stored = repo.list_reminders().await.unwrap();
        assert_eq!(stored.len(), 3);
        let mut ids: Vec<_> = stored.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_create_body_is_tolerated() {
        let (app, repo) = test_app();

        let created = app
            .handle_routes(request_with_body(Method::POST, RES_REMINDERS, "not json"))
            .await;
        assert_eq!(created.status_code, 200);
        assert_eq!(body_text(&created), "Reminder Insertion Success");

        let stored = repo.list_reminders().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "");
    }

    #[tokio::test]
    async fn test_create_without_body_is_tolerated() {
        let (app, repo) = test_app();

        let created = app
            .handle_routes(request(Method::POST, RES_REMINDERS))
            .await;
        assert_eq!(created.status_code, 200);
        assert_eq!(repo.list_reminders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_status_stub_leaves_store_unchanged() {
        let (app, repo) = test_app();
        let reminder = Reminder::new("Buy milk");
        repo.create_reminder(&reminder).await.unwrap();

        let updated = app
            .handle_routes(request_with_id(
                Method::PUT,
                RES_REMINDER_STATUS,
                &reminder.id,
            ))
            .await;
        assert_eq!(updated.status_code, 200);
        assert_eq!(body_text(&updated), "updateReminderStatus");
        assert_eq!(repo.list_reminders().await.unwrap(), vec![reminder]);
    }

    #[tokio::test]
    async fn test_flag_and_delete_stubs_acknowledge_with_fixed_text() {
        let (app, repo) = test_app();
        let reminder = Reminder::new("Buy milk");
        repo.create_reminder(&reminder).await.unwrap();

        let flagged = app
            .handle_routes(request_with_id(
                Method::PUT,
                RES_REMINDER_FLAG,
                &reminder.id,
            ))
            .await;
        assert_eq!(flagged.status_code, 200);
        assert_eq!(body_text(&flagged), "updateReminderFlag");

        let deleted = app
            .handle_routes(request_with_id(Method::DELETE, RES_A_REMINDER, &reminder.id))
            .await;
        assert_eq!(deleted.status_code, 200);
        assert_eq!(body_text(&deleted), "deleteReminder");

        // Neither stub touches the store.
        assert_eq!(repo.list_reminders().await.unwrap(), vec![reminder]);
    }

    #[tokio::test]
    async fn test_unmatched_combinations_are_not_supported() {
        let (app, _) = test_app();

        for (method, resource) in [
            (Method::DELETE, RES_REMINDERS),
            (Method::POST, RES_A_REMINDER),
            (Method::PUT, RES_REMINDERS),
            (Method::GET, RES_REMINDER_STATUS),
            (Method::PATCH, RES_REMINDERS),
            (Method::GET, "/unknown"),
        ] {
            let response = app.handle_routes(request(method, resource)).await;
            assert_eq!(response.status_code, 404);
            assert_eq!(body_text(&response), "Not Supported");
        }
    }

    #[tokio::test]
    async fn test_event_without_resource_is_not_supported() {
        let (app, _) = test_app();

        let response = app
            .handle_routes(ApiGatewayProxyRequest {
                http_method: Method::GET,
                ..Default::default()
            })
            .await;
        assert_eq!(response.status_code, 404);
    }
}
