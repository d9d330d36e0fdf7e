use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_sprints;

pub async fn handle_sprints(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_sprints_impl(_matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_sprints_impl(_matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let sprints = client.get_sprints().await?;

    if sprints.is_empty() {
        println!("No sprints found.");
    } else {
        println!("Found {} sprints:", sprints.len());
        print_sprints(&sprints);
    }

    Ok(())
}
