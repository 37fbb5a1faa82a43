//! Versioned habit schedules.
//!
//! A [`ScheduleTimeline`] is an append-only log of schedule versions. Each
//! [`ScheduleEntry`] carries the weekday set that applies from its
//! `effective_from` date until the next entry supersedes it. Resolution is
//! a point-in-time lookup: the entry governing a date is the last one
//! effective at or before it. Appending a change never alters how dates
//! before the change are resolved, so calendars, statistics, and the
//! recommendation engine all agree on historical scheduling facts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::habit::WeekdaySet;

/// One version of a habit's weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// First date this version governs.
    pub effective_from: NaiveDate,
    /// Weekdays scheduled under this version.
    pub days: WeekdaySet,
}

/// Append-only history of a habit's weekly schedule.
///
/// Invariants: at least one entry, strictly ascending unique
/// `effective_from` dates. Dates earlier than the first entry resolve to
/// the first entry (migration backfills the creation-date entry, so such
/// dates predate the habit itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScheduleEntry>", into = "Vec<ScheduleEntry>")]
pub struct ScheduleTimeline {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleTimeline {
    /// Create a timeline with a single entry.
    pub fn new(effective_from: NaiveDate, days: WeekdaySet) -> Self {
        Self {
            entries: vec![ScheduleEntry {
                effective_from,
                days,
            }],
        }
    }

    /// Rebuild a timeline from stored entries, validating the invariants.
    pub fn try_from_entries(entries: Vec<ScheduleEntry>) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::EmptyTimeline);
        }
        for pair in entries.windows(2) {
            if pair[1].effective_from <= pair[0].effective_from {
                return Err(ScheduleError::UnorderedEntries(pair[1].effective_from));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in ascending `effective_from` order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> &ScheduleEntry {
        // Invariant: a timeline is never empty.
        self.entries.last().expect("timeline has at least one entry")
    }

    /// Resolve the entry governing `date`.
    pub fn resolve(&self, date: NaiveDate) -> &ScheduleEntry {
        let idx = self
            .entries
            .partition_point(|entry| entry.effective_from <= date);
        if idx == 0 {
            &self.entries[0]
        } else {
            &self.entries[idx - 1]
        }
    }

    /// Append a schedule change, returning the extended timeline.
    ///
    /// A change dated on the latest entry's own `effective_from` replaces
    /// that entry's day set (the user re-edited the schedule the same day);
    /// resolution for strictly earlier dates is unchanged either way.
    ///
    /// # Errors
    /// [`ScheduleError::NonMonotonicChange`] if `effective_from` predates
    /// the latest entry, [`ScheduleError::EmptyDays`] if `days` is empty.
    pub fn with_change(
        &self,
        days: WeekdaySet,
        effective_from: NaiveDate,
    ) -> Result<Self, ScheduleError> {
        if days.is_empty() {
            return Err(ScheduleError::EmptyDays);
        }
        let latest = self.latest().effective_from;
        if effective_from < latest {
            return Err(ScheduleError::NonMonotonicChange {
                latest,
                requested: effective_from,
            });
        }

        let mut entries = self.entries.clone();
        if effective_from == latest {
            let last = entries.len() - 1;
            entries[last].days = days;
        } else {
            entries.push(ScheduleEntry {
                effective_from,
                days,
            });
        }
        Ok(Self { entries })
    }
}

impl From<ScheduleTimeline> for Vec<ScheduleEntry> {
    fn from(timeline: ScheduleTimeline) -> Self {
        timeline.entries
    }
}

impl TryFrom<Vec<ScheduleEntry>> for ScheduleTimeline {
    type Error = ScheduleError;

    fn try_from(entries: Vec<ScheduleEntry>) -> Result<Self, Self::Error> {
        Self::try_from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mwf() -> WeekdaySet {
        WeekdaySet::from_days(&[Weekday::Mon, Weekday::Wed, Weekday::Fri])
    }

    fn wfs() -> WeekdaySet {
        WeekdaySet::from_days(&[Weekday::Wed, Weekday::Fri, Weekday::Sat])
    }

    #[test]
    fn resolves_last_entry_at_or_before_date() {
        let timeline = ScheduleTimeline::new(date(2024, 5, 1), mwf())
            .with_change(wfs(), date(2024, 5, 22))
            .unwrap();

        assert_eq!(timeline.resolve(date(2024, 5, 21)).days, mwf());
        assert_eq!(timeline.resolve(date(2024, 5, 22)).days, wfs());
        assert_eq!(timeline.resolve(date(2024, 6, 30)).days, wfs());
    }

    #[test]
    fn date_before_first_entry_falls_back_to_first() {
        let timeline = ScheduleTimeline::new(date(2024, 5, 1), mwf());
        assert_eq!(timeline.resolve(date(2020, 1, 1)).days, mwf());
    }

    #[test]
    fn change_before_latest_entry_is_rejected() {
        let timeline = ScheduleTimeline::new(date(2024, 5, 1), mwf())
            .with_change(wfs(), date(2024, 5, 22))
            .unwrap();

        let err = timeline.with_change(mwf(), date(2024, 5, 10)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::NonMonotonicChange {
                latest: date(2024, 5, 22),
                requested: date(2024, 5, 10),
            }
        );
    }

    #[test]
    fn same_day_change_replaces_latest_entry() {
        let timeline = ScheduleTimeline::new(date(2024, 5, 1), mwf())
            .with_change(wfs(), date(2024, 5, 22))
            .unwrap();
        let edited = timeline
            .with_change(WeekdaySet::from_days(&[Weekday::Sun]), date(2024, 5, 22))
            .unwrap();

        assert_eq!(edited.entries().len(), 2);
        assert!(edited.resolve(date(2024, 5, 22)).days.contains(Weekday::Sun));
        // Strictly earlier dates still resolve through the original entry.
        assert_eq!(edited.resolve(date(2024, 5, 21)).days, mwf());
    }

    #[test]
    fn empty_day_set_is_rejected() {
        let timeline = ScheduleTimeline::new(date(2024, 5, 1), mwf());
        let err = timeline
            .with_change(WeekdaySet::empty(), date(2024, 6, 1))
            .unwrap_err();
        assert_eq!(err, ScheduleError::EmptyDays);
    }

    #[test]
    fn try_from_entries_validates_ordering() {
        let entries = vec![
            ScheduleEntry {
                effective_from: date(2024, 5, 22),
                days: wfs(),
            },
            ScheduleEntry {
                effective_from: date(2024, 5, 1),
                days: mwf(),
            },
        ];
        assert_eq!(
            ScheduleTimeline::try_from_entries(entries).unwrap_err(),
            ScheduleError::UnorderedEntries(date(2024, 5, 1))
        );
        assert_eq!(
            ScheduleTimeline::try_from_entries(Vec::new()).unwrap_err(),
            ScheduleError::EmptyTimeline
        );
    }

    #[test]
    fn serde_round_trip_preserves_entries() {
        let timeline = ScheduleTimeline::new(date(2024, 5, 1), mwf())
            .with_change(wfs(), date(2024, 5, 22))
            .unwrap();

        let json = serde_json::to_string(&timeline).unwrap();
        let decoded: ScheduleTimeline = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, timeline);
    }

    #[test]
    fn deserialize_rejects_unordered_entries() {
        let json = r#"[
            {"effective_from": "2024-05-22", "days": [2, 4, 5]},
            {"effective_from": "2024-05-01", "days": [0, 2, 4]}
        ]"#;
        let result: Result<ScheduleTimeline, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
