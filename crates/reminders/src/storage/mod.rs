//! Storage backend implementations.
//!
//! Concrete implementations of the repository trait defined in
//! `reminders_core::storage`: DynamoDB for deployment, and an in-memory
//! backend used as the test double.

pub mod dynamodb;
pub mod inmemory;
