use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use serde::Serialize;

use crate::common::{day_names, parse_days, CliResult, HabitFile};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Effective weekday set on a date
    Show {
        /// Habit data file (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Habit name or id prefix
        habit: String,
        /// Date to resolve
        date: NaiveDate,
    },
    /// Per-date scheduling answers over a date range
    Range {
        #[arg(long)]
        file: PathBuf,
        habit: String,
        from: NaiveDate,
        to: NaiveDate,
    },
    /// Append a schedule change and write the file back
    Change {
        #[arg(long)]
        file: PathBuf,
        habit: String,
        /// Comma-separated weekdays, e.g. `mon,wed,fri`
        days: String,
        /// First date the new schedule applies
        effective_from: NaiveDate,
    },
}

#[derive(Serialize)]
struct ShowOutput {
    habit: String,
    date: NaiveDate,
    days: Vec<String>,
}

#[derive(Serialize)]
struct RangeDay {
    date: NaiveDate,
    weekday: String,
    scheduled: bool,
}

pub fn run(action: ScheduleAction) -> CliResult<()> {
    match action {
        ScheduleAction::Show { file, habit, date } => {
            let data = HabitFile::load(&file)?;
            let habit = data.find_habit(&habit)?;
            let output = ShowOutput {
                habit: habit.name.clone(),
                date,
                days: day_names(habit.scheduled_days_for(date)),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        ScheduleAction::Range {
            file,
            habit,
            from,
            to,
        } => {
            let data = HabitFile::load(&file)?;
            let habit = data.find_habit(&habit)?;
            let days: Vec<RangeDay> = from
                .iter_days()
                .take_while(|date| *date <= to)
                .map(|date| RangeDay {
                    date,
                    weekday: format!("{}", date.weekday()).to_ascii_lowercase(),
                    scheduled: habit.was_scheduled_on(date, date.weekday()),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
        ScheduleAction::Change {
            file,
            habit,
            days,
            effective_from,
        } => {
            let mut data = HabitFile::load(&file)?;
            let idx = data.habit_index(&habit)?;
            let new_days = parse_days(&days)?;
            let updated = data.habits[idx]
                .clone()
                .with_schedule_change(new_days, effective_from)?;
            data.habits[idx] = updated;
            data.save(&file)?;
            println!("{}", serde_json::to_string_pretty(&data.habits[idx])?);
        }
    }
    Ok(())
}
