use aulaplan_core::{ScheduleMode, ScheduleModeResolver};
use clap::Args;

use super::common::InputArgs;
use crate::config::Config;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the dates as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let input = args.input.to_input(&config)?;
    if input.start_date.is_none() {
        return Err("generate requires --start-date".into());
    }

    let resolver = ScheduleModeResolver::new();
    let schedule = resolver.resolve(ScheduleMode::Regenerate, Some(&input), None)?;

    if (schedule.generated_dates.len() as u32) < input.counts.synchronous {
        eprintln!(
            "warning: placed {} of {} sessions; check the weekday selection",
            schedule.generated_dates.len(),
            input.counts.synchronous
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule.generated_dates)?);
    } else {
        for date in &schedule.generated_dates {
            println!("{date}");
        }
    }
    Ok(())
}
