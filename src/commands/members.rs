use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_members;

pub async fn handle_members(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_members_impl(_matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_members_impl(_matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let members = client.get_members().await?;

    if members.is_empty() {
        println!("No members found.");
    } else {
        println!("Found {} members:", members.len());
        print_members(&members);
    }

    Ok(())
}
