//! # Habitflow Core Library
//!
//! Core scheduling logic for the Habitflow personal-growth tracker. Screens,
//! storage, and gamification live elsewhere; this crate owns the one
//! subsystem with real temporal invariants: versioned habit schedules and
//! the statistics derived from them. A schedule edit applies going forward
//! while never changing how past dates are judged, and every consumer
//! (calendar, statistics, recommendations) resolves history through the
//! same functions so they always agree.
//!
//! ## Key components
//!
//! - [`ScheduleTimeline`]: append-only schedule history with point-in-time
//!   resolution
//! - [`Habit`]: the model type, with resolution queries and the
//!   migrate/append mutators (immutable-and-replaced values)
//! - [`collect_period_stats`] / [`completion_rate`]: period completion
//!   statistics with bonus-completion weighting
//! - [`HabitAge`] / [`select_feedback`]: maturity gating and the feedback
//!   decision table
//!
//! Everything here is pure and synchronous: no I/O, no shared state, safe
//! to call concurrently across habits, and memoizable by callers.

pub mod error;
pub mod feedback;
pub mod habit;
pub mod stats;
pub mod timeline;

pub use error::ScheduleError;
pub use feedback::{select_feedback, AgeClass, FeedbackMessage, HabitAge, MessageKey, Tone};
pub use habit::{Habit, HabitCompletion, Schedule, WeekdaySet};
pub use stats::{
    collect_period_stats, completion_rate, CompletionPeriodStats, CompletionRate,
    MAXED_OUT_THRESHOLD,
};
pub use timeline::{ScheduleEntry, ScheduleTimeline};
