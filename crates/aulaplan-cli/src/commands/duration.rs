use aulaplan_core::DurationCalculator;
use clap::Args;

use super::common::InputArgs;
use crate::config::Config;

#[derive(Args)]
pub struct DurationArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the full schedule as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DurationArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let input = args.input.to_input(&config)?;
    let schedule = DurationCalculator::new().compute(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!(
        "weekday session hours: {:.2}",
        schedule.weekday_duration_hours
    );
    if schedule.saturday_duration_hours > 0.0 {
        println!(
            "saturday session hours: {:.2}",
            schedule.saturday_duration_hours
        );
    }
    println!(
        "total duration hours: {:.2} ({} synchronous sessions)",
        schedule.total_duration_hours, schedule.counts.synchronous
    );
    Ok(())
}
