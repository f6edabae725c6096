//! Value objects - small immutable types with no identity

mod calendar;
mod stat;
mod training;

pub use calendar::{is_training_month, month_copy, MonthCopy, MonthGuide, TRAINABLE_MONTHS};
pub use stat::{ColorTier, StatBlock, StatKey};
pub use training::{IntensityTier, TrainingFocus};
