//! Habit maturity classification and feedback message selection.
//!
//! Feedback is gated by habit age: a brand-new habit has no meaningful
//! statistics yet, so it gets encouragement regardless of its numbers,
//! while an established habit is judged against a higher bar. The selector
//! is a deterministic decision table over (age class, total rate); the UI
//! resolves the returned key to localized copy and interpolates the rate
//! and habit name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::stats::CompletionRate;

/// Maturity bucket for a habit. Exactly one class holds for any age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeClass {
    /// Less than 7 days old.
    New,
    /// 7 to 13 days old.
    Early,
    /// 14 days or older.
    Established,
}

/// A habit's age relative to a reference date, with display gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitAge {
    pub days_since_creation: i64,
    pub class: AgeClass,
    /// Trend displays need a week of data.
    pub can_show_trends: bool,
    /// Performance displays need at least one full day.
    pub can_show_performance: bool,
}

impl HabitAge {
    /// Classify `habit` as of `today`.
    ///
    /// A `today` earlier than the creation date (clock skew between
    /// devices) clamps the age to zero.
    pub fn classify(habit: &Habit, today: NaiveDate) -> Self {
        let days = (today - habit.created_at).num_days().max(0);
        let class = if days < 7 {
            AgeClass::New
        } else if days < 14 {
            AgeClass::Early
        } else {
            AgeClass::Established
        };
        Self {
            days_since_creation: days,
            class,
            can_show_trends: days >= 7,
            can_show_performance: days >= 1,
        }
    }

    pub fn is_new(&self) -> bool {
        self.class == AgeClass::New
    }

    pub fn is_early(&self) -> bool {
        self.class == AgeClass::Early
    }

    pub fn is_established(&self) -> bool {
        self.class == AgeClass::Established
    }
}

/// Emotional register of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Encouraging,
    Warning,
}

/// Key identifying a feedback message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    NewHabitWelcome,
    EarlyPerfectStart,
    EarlyOnTrack,
    EarlyFindingRhythm,
    EstablishedCrushingIt,
    EstablishedBeyondSchedule,
    EstablishedStrong,
    EstablishedSteady,
    EstablishedNeedsAttention,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewHabitWelcome => "new_habit_welcome",
            Self::EarlyPerfectStart => "early_perfect_start",
            Self::EarlyOnTrack => "early_on_track",
            Self::EarlyFindingRhythm => "early_finding_rhythm",
            Self::EstablishedCrushingIt => "established_crushing_it",
            Self::EstablishedBeyondSchedule => "established_beyond_schedule",
            Self::EstablishedStrong => "established_strong",
            Self::EstablishedSteady => "established_steady",
            Self::EstablishedNeedsAttention => "established_needs_attention",
        }
    }
}

/// A selected feedback message with its interpolation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub key: MessageKey,
    pub tone: Tone,
    /// Total completion rate, rounded to one decimal.
    pub rate: f64,
    pub habit_name: String,
}

/// Pick the feedback message for a habit given its age and period rate.
///
/// Thresholds are checked highest first within each age class, and no
/// threshold is shared across classes: a new habit at 60% is doing well,
/// an established one at 60% is merely steady.
pub fn select_feedback(habit: &Habit, age: &HabitAge, rate: &CompletionRate) -> FeedbackMessage {
    let total = rate.total_rate;
    let (key, tone) = match age.class {
        AgeClass::New => (MessageKey::NewHabitWelcome, Tone::Encouraging),
        AgeClass::Early => {
            if total >= 100.0 {
                (MessageKey::EarlyPerfectStart, Tone::Positive)
            } else if total >= 50.0 {
                (MessageKey::EarlyOnTrack, Tone::Encouraging)
            } else {
                (MessageKey::EarlyFindingRhythm, Tone::Encouraging)
            }
        }
        AgeClass::Established => {
            if total >= 200.0 {
                (MessageKey::EstablishedCrushingIt, Tone::Positive)
            } else if total >= 120.0 {
                (MessageKey::EstablishedBeyondSchedule, Tone::Positive)
            } else if total >= 80.0 {
                (MessageKey::EstablishedStrong, Tone::Positive)
            } else if total >= 50.0 {
                (MessageKey::EstablishedSteady, Tone::Neutral)
            } else {
                (MessageKey::EstablishedNeedsAttention, Tone::Warning)
            }
        }
    };
    FeedbackMessage {
        key,
        tone,
        rate: total,
        habit_name: habit.name.clone(),
    }
}
