use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;
use habitflow_core::{collect_period_stats, completion_rate};

use crate::common::{CliResult, HabitFile};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Completion rates for a period
    Rate {
        /// Habit data file (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Habit name or id prefix
        habit: String,
        from: NaiveDate,
        to: NaiveDate,
    },
    /// Raw aggregated counts for a period
    Counts {
        #[arg(long)]
        file: PathBuf,
        habit: String,
        from: NaiveDate,
        to: NaiveDate,
    },
}

pub fn run(action: StatsAction) -> CliResult<()> {
    match action {
        StatsAction::Rate {
            file,
            habit,
            from,
            to,
        } => {
            let data = HabitFile::load(&file)?;
            let habit = data.find_habit(&habit)?;
            let completions = data.completions_for(habit);
            let stats = collect_period_stats(habit, &completions, from, to);
            let rate = completion_rate(&stats);
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }
        StatsAction::Counts {
            file,
            habit,
            from,
            to,
        } => {
            let data = HabitFile::load(&file)?;
            let habit = data.find_habit(&habit)?;
            let completions = data.completions_for(habit);
            let stats = collect_period_stats(habit, &completions, from, to);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
