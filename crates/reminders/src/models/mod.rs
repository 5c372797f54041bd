mod reminder;

pub use reminder::CreateReminder;
