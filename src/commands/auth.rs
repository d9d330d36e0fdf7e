use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::load_config;
use crate::error::{ClubhouseResult, ErrorContext};

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_auth_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_auth_impl(matches: &ArgMatches) -> ClubhouseResult<()> {
    if let Some(api_token) = matches.get_one::<String>("api-token") {
        let mut context = CliContext::new();
        context
            .set_api_token(api_token.clone())
            .context("Failed to save API token")?;
        println!("API token saved successfully!");

        // Check the token by fetching the member list
        let client = context.verified_client()?;
        match client.get_members().await {
            Ok(members) => println!(
                "{} Connected: workspace has {} members",
                "✅".green(),
                members.len()
            ),
            Err(e) => println!("{} Failed to authenticate: {}", "❌".red(), e),
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.api_token {
            Some(token) if token.len() > 12 => {
                println!("API Token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("API Token: (configured)"),
            None => println!("No API token configured"),
        }
    } else {
        println!("Usage: clubhouse auth --api-token <TOKEN> or clubhouse auth --show");
    }
    Ok(())
}
