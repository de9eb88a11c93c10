use aulaplan_core::{
    ModuleSchedule, ScheduleMode, ScheduleModeResolver, SchedulePayloadBuilder, WeekdayPattern,
};
use clap::Args;
use serde::{Deserialize, Serialize};

use super::common::InputArgs;
use crate::config::Config;

/// Stored module record, as the persistence boundary hands it back.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredRecord {
    pub pattern: WeekdayPattern,
    pub schedule: ModuleSchedule,
}

#[derive(Args)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Resolution mode: create, regenerate or preserve
    #[arg(long, default_value = "create")]
    pub mode: ScheduleMode,

    /// Previously stored record (JSON file), required for preserve mode
    #[arg(long)]
    pub stored: Option<std::path::PathBuf>,
}

pub fn run(args: PayloadArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let resolver = ScheduleModeResolver::new();

    let payload = match args.mode {
        ScheduleMode::Preserve => {
            let path = args
                .stored
                .ok_or("preserve mode requires --stored <file>")?;
            let raw = std::fs::read_to_string(&path)?;
            let record: StoredRecord = serde_json::from_str(&raw)?;
            let schedule =
                resolver.resolve(ScheduleMode::Preserve, None, Some(&record.schedule))?;
            SchedulePayloadBuilder::build(&schedule, &record.pattern)
        }
        mode => {
            let input = args.input.to_input(&config)?;
            let schedule = resolver.resolve(mode, Some(&input), None)?;
            SchedulePayloadBuilder::build(&schedule, &input.pattern)
        }
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
