pub mod lifecycle;
pub mod reconciler;

pub use lifecycle::AppointmentLifecycleService;
pub use reconciler::{AvailabilityReconciler, AvailabilityService};
