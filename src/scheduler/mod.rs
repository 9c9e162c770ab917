mod scheduler;
mod task_guard;

pub use scheduler::{poll_gps_status, refresh_distance};
pub use task_guard::TaskGuard;
