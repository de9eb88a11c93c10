use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "aulaplan-cli", version, about = "Aulaplan module scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute instructional duration for a weekly pattern
    Duration(commands::duration::DurationArgs),
    /// Generate the concrete session calendar
    Generate(commands::generate::GenerateArgs),
    /// Build the normalized persistence payload
    Payload(commands::payload::PayloadArgs),
    /// Describe a weekday selection in words
    Describe(commands::describe::DescribeArgs),
    /// Default flag value management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Duration(args) => commands::duration::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Payload(args) => commands::payload::run(args),
        Commands::Describe(args) => commands::describe::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
