pub mod entry;
pub mod stats;

pub use entry::{NewEntry, WorkLogEntry};
pub use stats::{Aggregate, CategoryStat, WeeklyStat};
