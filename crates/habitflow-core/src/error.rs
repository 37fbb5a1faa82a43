//! Core error types for habitflow-core.
//!
//! Resolution and rate computation are total functions and never fail;
//! errors only arise when mutating or reconstructing schedule timelines.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by schedule mutation and timeline construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A schedule change dated before the latest existing entry. Accepting
    /// it would require rewriting history, which the timeline never does.
    #[error("schedule change effective {requested} predates the latest entry ({latest})")]
    NonMonotonicChange {
        latest: NaiveDate,
        requested: NaiveDate,
    },

    /// A schedule change with no weekdays selected.
    #[error("schedule change must include at least one weekday")]
    EmptyDays,

    /// A timeline reconstructed from zero entries.
    #[error("schedule timeline must contain at least one entry")]
    EmptyTimeline,

    /// Timeline entries not strictly ascending by effective date.
    #[error("schedule timeline entries out of order at {0}")]
    UnorderedEntries(NaiveDate),
}
