pub mod constraints;
pub mod snapshot;

pub use constraints::ConstraintEvaluator;
pub use snapshot::{holiday_window, ScheduleSnapshotService};
