use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_teams;

pub async fn handle_teams(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_teams_impl(_matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_teams_impl(_matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let teams = client.get_teams().await?;

    if teams.is_empty() {
        println!("No teams found.");
    } else {
        println!("Found {} teams:", teams.len());
        print_teams(&teams);
    }

    Ok(())
}
