use clap::Subcommand;

use super::common;
use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current defaults
    Show,
    /// Set the default weekday selection
    SetDays {
        /// Weekdays, as names or codes: "mon,wed,fri" or "1,3,5"
        days: String,
    },
    /// Set the default weekday window
    SetWindow {
        /// Time window, e.g. "18:00-20:00"
        window: String,
    },
    /// Set the default Saturday window
    SetSaturdayWindow {
        /// Time window, e.g. "09:00-12:00"
        window: String,
    },
    /// Clear all defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::SetDays { days } => {
            common::parse_days(&days)?; // validate before persisting
            let mut config = Config::load_or_default();
            config.default_days = Some(days);
            config.save()?;
            println!("default days updated");
        }
        ConfigAction::SetWindow { window } => {
            common::parse_window(&window)?;
            let mut config = Config::load_or_default();
            config.default_window = Some(window);
            config.save()?;
            println!("default window updated");
        }
        ConfigAction::SetSaturdayWindow { window } => {
            common::parse_window(&window)?;
            let mut config = Config::load_or_default();
            config.default_saturday_window = Some(window);
            config.save()?;
            println!("default saturday window updated");
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("defaults cleared");
        }
    }
    Ok(())
}
