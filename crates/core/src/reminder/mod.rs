mod types;

pub use types::Reminder;
