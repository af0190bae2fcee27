pub mod models;
pub mod period;

pub use models::{Match, RawRecord};
pub use period::{Period, PeriodWindow};
