mod app;
mod config;
mod handlers;
mod models;
mod storage;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::Application;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber. CloudWatch timestamps every line, so
    // the JSON formatter skips its own.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reminders=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json().without_time())
        .init();

    // The application context is built once per execution environment and
    // reused across warm invocations.
    let app = Application::from_env().await;

    tracing::info!(
        table = %app.config.table_name,
        region = %app.config.aws_region,
        "Reminders API ready"
    );

    run(service_fn(|event: LambdaEvent<ApiGatewayProxyRequest>| {
        handle_event(&app, event)
    }))
    .await
}

async fn handle_event(
    app: &Application,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let (request, context) = event.into_parts();

    tracing::info!(
        method = %request.http_method,
        resource = request.resource.as_deref().unwrap_or_default(),
        request_id = %context.request_id,
        "Handling request"
    );

    Ok(app.handle_routes(request).await)
}
