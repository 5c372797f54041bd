use std::env;

/// Application configuration loaded from environment variables.
///
/// Only the entry point reads the environment; everything downstream
/// receives this struct.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DynamoDB table holding the reminder records.
    pub table_name: String,
    /// AWS region the table lives in.
    pub aws_region: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "Reminders")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "Reminders".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}
