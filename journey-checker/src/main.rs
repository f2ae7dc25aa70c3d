use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use journey_checker::checker::{RoadJourneyChecker, StdoutWriter};
use journey_checker::config::{JourneyType, Settings};
use journey_checker::outcome::ResultStatus;
use journey_checker::tfl::RoadClient;

/// Check the current status of a TfL road.
#[derive(Parser)]
#[command(name = "journey-checker")]
struct Cli {
    /// Road id to query, e.g. "A2"
    road_id: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the report lines on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("Started TFL Journey status checker");

    let cli = Cli::parse();

    // Only road journeys are implemented; any other selector is fatal
    // before we touch the network.
    let journey_type = std::env::var("TFL_JOURNEY_TYPE").unwrap_or_else(|_| "Road".to_string());
    if let Err(e) = JourneyType::parse(&journey_type) {
        eprintln!("{e}");
        return ResultStatus::GeneralError.into();
    }

    let settings = Settings::from_env();
    let client = match RoadClient::new(settings) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create TfL client: {e}");
            return ResultStatus::GeneralError.into();
        }
    };

    let mut checker = RoadJourneyChecker::new(client, StdoutWriter);
    checker.check_status(cli.road_id.as_deref()).await.into()
}
