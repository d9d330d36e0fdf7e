use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_epics;

pub async fn handle_epics(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_epics_impl(_matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_epics_impl(_matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let epics = client.get_epics().await?;

    if epics.is_empty() {
        println!("No epics found.");
    } else {
        println!("Found {} epics:", epics.len());
        print_epics(&epics);
    }

    Ok(())
}
