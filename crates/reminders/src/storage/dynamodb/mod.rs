//! DynamoDB storage backend implementation.
//!
//! This module provides the DynamoDB-based implementation of the
//! repository trait using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
