//! Shared helpers for CLI commands: data-file access and argument parsing.

use std::fs;
use std::path::Path;

use chrono::Weekday;
use habitflow_core::{Habit, HabitCompletion, WeekdaySet};
use serde::{Deserialize, Serialize};

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// On-disk shape of a habit data file (the export format the app's storage
/// layer writes).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HabitFile {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub completions: Vec<HabitCompletion>,
}

impl HabitFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> CliResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Find a habit by exact name (case-insensitive) or id prefix.
    pub fn find_habit(&self, needle: &str) -> CliResult<&Habit> {
        self.habit_index(needle).map(|idx| &self.habits[idx])
    }

    pub fn habit_index(&self, needle: &str) -> CliResult<usize> {
        let by_name = self
            .habits
            .iter()
            .position(|h| h.name.eq_ignore_ascii_case(needle));
        let idx = by_name.or_else(|| {
            self.habits
                .iter()
                .position(|h| h.id.to_string().starts_with(needle))
        });
        idx.ok_or_else(|| format!("no habit matching '{needle}'").into())
    }

    /// Completions belonging to one habit.
    pub fn completions_for(&self, habit: &Habit) -> Vec<HabitCompletion> {
        self.completions
            .iter()
            .filter(|c| c.habit_id == habit.id)
            .copied()
            .collect()
    }
}

/// Parse a comma-separated weekday list like `mon,wed,fri`.
pub fn parse_days(list: &str) -> CliResult<WeekdaySet> {
    let mut set = WeekdaySet::empty();
    for token in list.split(',') {
        let day = match token.trim().to_ascii_lowercase().as_str() {
            "mon" | "monday" => Weekday::Mon,
            "tue" | "tuesday" => Weekday::Tue,
            "wed" | "wednesday" => Weekday::Wed,
            "thu" | "thursday" => Weekday::Thu,
            "fri" | "friday" => Weekday::Fri,
            "sat" | "saturday" => Weekday::Sat,
            "sun" | "sunday" => Weekday::Sun,
            other => return Err(format!("unknown weekday: '{other}'").into()),
        };
        set.insert(day);
    }
    Ok(set)
}

/// Render a weekday set as lowercase short names for JSON output.
pub fn day_names(days: WeekdaySet) -> Vec<String> {
    days.iter()
        .map(|day| format!("{day}").to_ascii_lowercase())
        .collect()
}
