//! Statistics for habit completion over time.
//!
//! The period aggregation walks a date range through the schedule timeline,
//! so counts always reflect the schedule that was in effect on each date.

mod completion_rate;

pub use completion_rate::{
    collect_period_stats, completion_rate, CompletionPeriodStats, CompletionRate,
    MAXED_OUT_THRESHOLD,
};
