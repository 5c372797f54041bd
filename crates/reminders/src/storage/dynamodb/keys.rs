//! Key schema for the reminders table.
//!
//! A stored reminder is keyed on the (id, title) pair: the id maps to the
//! partition key attribute and the title to the sort key attribute. Title
//! in the sort-key role means reminders sharing an id but differing in
//! title are distinct items, and a lookup by id queries the partition and
//! can return several rows. Uniqueness holds only on the full pair.

/// Partition key attribute, mapped from the reminder id.
pub const ATTR_PK: &str = "pk";

/// Sort key attribute, mapped from the reminder title.
pub const ATTR_SK: &str = "sk";
