//! Response envelope helpers.
//!
//! Every handler answers with the same gateway proxy envelope: a status
//! code and a text body. Transport framing beyond that belongs to the
//! gateway.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;

/// 200 envelope with the given body.
pub fn ok(body: impl Into<String>) -> ApiGatewayProxyResponse {
    respond(200, body.into())
}

/// 404 envelope for a (method, resource) pair outside the dispatch table.
pub fn not_supported(body: impl Into<String>) -> ApiGatewayProxyResponse {
    respond(404, body.into())
}

/// 500 envelope carrying a human-readable failure message.
pub fn internal_server_error(body: impl Into<String>) -> ApiGatewayProxyResponse {
    respond(500, body.into())
}

fn respond(status_code: i64, body: String) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code,
        body: Some(Body::Text(body)),
        ..Default::default()
    }
}
