use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::load_config;
use crate::error::{ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_state_summary;

pub async fn handle_state(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_state_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_state_impl(matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;
    let config = load_config();

    let snapshot = client.get_state(&config).await?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_state_summary(&snapshot);
    }

    Ok(())
}
