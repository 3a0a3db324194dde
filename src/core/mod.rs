pub mod aggregate;
pub mod duration;
pub mod leave;
pub mod pivot;
pub mod range;
pub mod report;
pub mod totals;

pub use leave::LeaveMap;
pub use range::DateRange;
pub use report::{PivotReport, build_detail_report, build_pivot_report};
