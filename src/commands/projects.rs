use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_projects;

pub async fn handle_projects(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_projects_impl(_matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_projects_impl(_matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let projects = client.get_projects().await?;

    if projects.is_empty() {
        println!("No projects found.");
    } else {
        println!("Found {} projects:", projects.len());
        print_projects(&projects);
    }

    Ok(())
}
