//! Core types for the reminders API: the domain record, the dispatch
//! table, and the storage abstraction the service implements against.

pub mod reminder;
pub mod routing;
pub mod storage;
