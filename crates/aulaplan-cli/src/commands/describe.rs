use aulaplan_core::weekday_label;
use clap::Args;

use super::common::parse_days;

#[derive(Args)]
pub struct DescribeArgs {
    /// Weekdays, as names or codes: "mon,wed,fri" or "1,3,5"
    pub days: String,
}

pub fn run(args: DescribeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let days = parse_days(&args.days)?;
    println!("{}", weekday_label(days));
    Ok(())
}
