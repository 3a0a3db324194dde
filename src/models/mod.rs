pub mod day_cell;
pub mod detail;
pub mod entry;
pub mod pivot;

pub use day_cell::DayCell;
pub use detail::{DetailEntryRow, DetailRow};
pub use entry::{EntryRow, Location};
pub use pivot::{PivotRow, ReportKey};
