mod fade;
mod interval_cache;
mod scheduler;

pub use fade::{Fade, FadeStep};
pub use interval_cache::{Interval, IntervalCache, IntervalKeyPolicy};
pub use scheduler::{Action, Scheduler};
