use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use habitflow_core::{collect_period_stats, completion_rate, select_feedback, HabitAge};

use crate::common::{CliResult, HabitFile};

#[derive(Subcommand)]
pub enum FeedbackAction {
    /// Age classification and display gates
    Age {
        /// Habit data file (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Habit name or id prefix
        habit: String,
        /// Reference date, defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Feedback message for a period
    Show {
        #[arg(long)]
        file: PathBuf,
        habit: String,
        from: NaiveDate,
        to: NaiveDate,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: FeedbackAction) -> CliResult<()> {
    match action {
        FeedbackAction::Age { file, habit, today } => {
            let data = HabitFile::load(&file)?;
            let habit = data.find_habit(&habit)?;
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let age = HabitAge::classify(habit, today);
            println!("{}", serde_json::to_string_pretty(&age)?);
        }
        FeedbackAction::Show {
            file,
            habit,
            from,
            to,
            today,
        } => {
            let data = HabitFile::load(&file)?;
            let habit = data.find_habit(&habit)?;
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let completions = data.completions_for(habit);
            let stats = collect_period_stats(habit, &completions, from, to);
            let rate = completion_rate(&stats);
            let age = HabitAge::classify(habit, today);
            let message = select_feedback(habit, &age, &rate);
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
    }
    Ok(())
}
