//! Habit model types and schedule resolution.

mod weekday_set;

pub use weekday_set::WeekdaySet;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ScheduleError;
use crate::timeline::ScheduleTimeline;

/// A habit's schedule, in one of two historical forms.
///
/// `Weekly` is the legacy flat form: a single weekday set applying to the
/// habit's entire lifetime. `Timeline` is the versioned form produced by the
/// first schedule edit. Both answer the same resolution queries; legacy
/// habits simply ignore the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Schedule {
    Weekly(WeekdaySet),
    Timeline(ScheduleTimeline),
}

/// A tracked habit.
///
/// Habit values are treated as immutable: schedule edits go through
/// [`Habit::with_schedule_change`], which returns a new value for the caller
/// to persist, leaving the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Creation date; never changes after the habit is created.
    pub created_at: NaiveDate,
    pub is_active: bool,
    /// Ordering index within the habit list.
    #[serde(default)]
    pub position: i32,
    pub schedule: Schedule,
}

impl Habit {
    /// Create a new active habit with a legacy weekly schedule.
    pub fn new(name: impl Into<String>, created_at: NaiveDate, days: WeekdaySet) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            emoji: None,
            color: None,
            created_at,
            is_active: true,
            position: 0,
            schedule: Schedule::Weekly(days),
        }
    }

    /// Was `weekday` scheduled on `date`?
    ///
    /// `weekday` is caller-supplied and expected to match `date`; resolution
    /// only uses it for set membership, so the function is total for any
    /// pairing. Pure: answers never change unless the schedule itself does,
    /// and appends never affect dates before their effective date.
    pub fn was_scheduled_on(&self, date: NaiveDate, weekday: Weekday) -> bool {
        self.scheduled_days_for(date).contains(weekday)
    }

    /// The full weekday set in effect on `date`.
    pub fn scheduled_days_for(&self, date: NaiveDate) -> WeekdaySet {
        match &self.schedule {
            Schedule::Weekly(days) => *days,
            Schedule::Timeline(timeline) => timeline.resolve(date).days,
        }
    }

    pub fn has_timeline(&self) -> bool {
        matches!(self.schedule, Schedule::Timeline(_))
    }

    /// Convert a legacy weekly schedule into a one-entry timeline rooted at
    /// the creation date. Behaviorally identical to the legacy form, and a
    /// no-op for habits that already carry a timeline.
    pub fn migrate_to_timeline(self) -> Self {
        let schedule = match self.schedule {
            Schedule::Weekly(days) => {
                Schedule::Timeline(ScheduleTimeline::new(self.created_at, days))
            }
            timeline @ Schedule::Timeline(_) => timeline,
        };
        Self { schedule, ..self }
    }

    /// Append a schedule change effective from `effective_from`, migrating a
    /// legacy schedule first if necessary.
    ///
    /// # Errors
    /// See [`ScheduleTimeline::with_change`].
    pub fn with_schedule_change(
        self,
        days: WeekdaySet,
        effective_from: NaiveDate,
    ) -> Result<Self, ScheduleError> {
        let migrated = self.migrate_to_timeline();
        let timeline = match &migrated.schedule {
            Schedule::Timeline(timeline) => timeline.with_change(days, effective_from)?,
            // migrate_to_timeline always yields the timeline form
            Schedule::Weekly(_) => unreachable!(),
        };
        Ok(Self {
            schedule: Schedule::Timeline(timeline),
            ..migrated
        })
    }
}

/// Completion record for one habit on one date.
///
/// The storage layer guarantees at most one record per `(habit_id, date)`.
/// Records are created and removed by direct user toggles and never
/// reinterpreted retroactively; period statistics classify each one against
/// the schedule that was in effect on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCompletion {
    pub habit_id: Uuid,
    pub date: NaiveDate,
    pub completed: bool,
    /// Set at toggle time when the date was not scheduled.
    pub is_bonus: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mwf() -> WeekdaySet {
        WeekdaySet::from_days(&[Weekday::Mon, Weekday::Wed, Weekday::Fri])
    }

    #[test]
    fn legacy_schedule_ignores_date() {
        let habit = Habit::new("Read", date(2024, 5, 1), mwf());
        assert!(habit.was_scheduled_on(date(2020, 1, 6), Weekday::Mon));
        assert!(habit.was_scheduled_on(date(2030, 1, 7), Weekday::Mon));
        assert!(!habit.was_scheduled_on(date(2024, 5, 7), Weekday::Tue));
    }

    #[test]
    fn migration_is_idempotent_and_behavior_preserving() {
        let legacy = Habit::new("Read", date(2024, 5, 1), mwf());
        let migrated = legacy.clone().migrate_to_timeline();
        assert!(migrated.has_timeline());

        // Same answers as the legacy form for dates around creation.
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Sat] {
            assert_eq!(
                migrated.was_scheduled_on(date(2024, 5, 6), day),
                legacy.was_scheduled_on(date(2024, 5, 6), day),
            );
            assert_eq!(
                migrated.was_scheduled_on(date(2024, 4, 1), day),
                legacy.was_scheduled_on(date(2024, 4, 1), day),
            );
        }

        let twice = migrated.clone().migrate_to_timeline();
        assert_eq!(twice, migrated);
    }

    #[test]
    fn schedule_change_applies_forward_only() {
        // Created 2024-05-01 with Mon/Wed/Fri, changed to Wed/Fri/Sat
        // effective 2024-05-22.
        let habit = Habit::new("Run", date(2024, 5, 1), mwf())
            .with_schedule_change(
                WeekdaySet::from_days(&[Weekday::Wed, Weekday::Fri, Weekday::Sat]),
                date(2024, 5, 22),
            )
            .unwrap();

        assert!(habit.was_scheduled_on(date(2024, 5, 20), Weekday::Mon));
        assert!(!habit.was_scheduled_on(date(2024, 5, 27), Weekday::Mon));
        assert!(!habit.was_scheduled_on(date(2024, 5, 18), Weekday::Sat));
        assert!(habit.was_scheduled_on(date(2024, 5, 25), Weekday::Sat));
        // Wednesday is scheduled on both sides of the boundary.
        assert!(habit.was_scheduled_on(date(2024, 5, 15), Weekday::Wed));
        assert!(habit.was_scheduled_on(date(2024, 5, 29), Weekday::Wed));
    }

    #[test]
    fn habit_serde_round_trip() {
        let habit = Habit::new("Meditate", date(2024, 5, 1), mwf())
            .with_schedule_change(WeekdaySet::from_days(&[Weekday::Sun]), date(2024, 6, 1))
            .unwrap();

        let json = serde_json::to_string(&habit).unwrap();
        let decoded: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, habit);
    }
}
