//! Collaborator value types consumed by query records.

mod stacktrace;
mod timedelta;

pub use stacktrace::{StackTrace, StacktraceLine};
pub use timedelta::TimeDelta;
