//! Training schedule: raw week entries parsed into per-day plans.

mod loader;
mod plan;

pub use loader::{Schedule, load_schedule};
pub use plan::{DayKind, PlanFormatError, WeekPlan};
