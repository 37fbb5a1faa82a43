//! Completion-rate computation for a habit over a date range.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::habit::{Habit, HabitCompletion};

/// Total completion rate above which a period counts as maxed out, percent.
pub const MAXED_OUT_THRESHOLD: f64 = 120.0;

/// Aggregated completion counts for one habit over one date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPeriodStats {
    /// Dates in the range on which the habit was scheduled.
    pub scheduled_days: u32,
    /// Completions on scheduled dates, including make-ups filled in later.
    pub completed_scheduled: u32,
    /// Completions on dates the habit was not scheduled.
    pub bonus_completions: u32,
}

/// Completion rates for a period, in percent, rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionRate {
    pub scheduled_rate: f64,
    pub bonus_rate: f64,
    pub total_rate: f64,
    /// True when `total_rate` exceeds [`MAXED_OUT_THRESHOLD`].
    pub is_maxed_out: bool,
}

/// Compute period rates from aggregated counts.
///
/// Bonus completions are measured against the same `scheduled_days`
/// denominator as scheduled ones: a bonus on a once-a-week habit is worth
/// proportionally more than one on a daily habit, with no separate weighting
/// table. A period with zero scheduled days (brand-new habit, or a period
/// entirely before creation) yields all-zero rates, never `NaN`.
pub fn completion_rate(stats: &CompletionPeriodStats) -> CompletionRate {
    if stats.scheduled_days == 0 {
        return CompletionRate::default();
    }

    let denominator = f64::from(stats.scheduled_days);
    let total_rate = round1(
        f64::from(stats.completed_scheduled + stats.bonus_completions) / denominator * 100.0,
    );
    CompletionRate {
        scheduled_rate: round1(f64::from(stats.completed_scheduled) / denominator * 100.0),
        bonus_rate: round1(f64::from(stats.bonus_completions) / denominator * 100.0),
        total_rate,
        is_maxed_out: total_rate > MAXED_OUT_THRESHOLD,
    }
}

/// Aggregate completion counts for `habit` over `start..=end`.
///
/// Each date is classified against the schedule in effect on that date, so
/// later schedule edits never change how a past date is judged. Records for
/// other habits, records with `completed == false`, and records outside the
/// range are ignored. An inverted range yields empty stats.
pub fn collect_period_stats(
    habit: &Habit,
    completions: &[HabitCompletion],
    start: NaiveDate,
    end: NaiveDate,
) -> CompletionPeriodStats {
    let completed: HashSet<NaiveDate> = completions
        .iter()
        .filter(|record| record.habit_id == habit.id && record.completed)
        .map(|record| record.date)
        .collect();

    let mut stats = CompletionPeriodStats::default();
    for date in start.iter_days().take_while(|date| *date <= end) {
        let scheduled = habit.was_scheduled_on(date, date.weekday());
        let done = completed.contains(&date);
        if scheduled {
            stats.scheduled_days += 1;
            if done {
                stats.completed_scheduled += 1;
            }
        } else if done {
            stats.bonus_completions += 1;
        }
    }
    stats
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
