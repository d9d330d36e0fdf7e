use clap::ArgMatches;
use serde_json::json;

use crate::cli_context::CliContext;
use crate::clubhouse_error;
use crate::config::load_config;
use crate::error::{ClubhouseError, ClubhouseResult, ErrorContext};
use crate::formatting::resources::print_story;
use crate::models::{OwnerIds, StoryDraft};

pub async fn handle_create_story(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_create_story_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_create_story_impl(matches: &ArgMatches) -> ClubhouseResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.verified_client()?;

    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| clubhouse_error!(InvalidInput, "Story name is required"))?;

    let project_id = match matches.get_one::<String>("project") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| clubhouse_error!(InvalidInput, "Invalid project id: {}", raw))?,
        None => load_config().default_project_id.ok_or_else(|| {
            clubhouse_error!(
                InvalidInput,
                "No project specified and no default project configured"
            )
        })?,
    };

    let mut draft = StoryDraft::new(name.clone(), project_id);
    draft.description = matches.get_one::<String>("description").cloned();
    draft.story_type = matches.get_one::<String>("type").cloned();

    if let Some(raw) = matches.get_one::<String>("epic") {
        let epic_id = raw
            .parse::<u64>()
            .map_err(|_| clubhouse_error!(InvalidInput, "Invalid epic id: {}", raw))?;
        draft.epic_id = Some(epic_id);
    }

    if let Some(owners) = matches.get_many::<String>("owners") {
        draft.owner_ids = Some(OwnerIds::Many(owners.cloned().collect()));
    }

    if let Some(labels) = matches.get_many::<String>("labels") {
        draft.labels = Some(labels.map(|name| json!({ "name": name })).collect());
    }

    let story = client.create_story(&draft).await?;
    print_story(&story);

    Ok(())
}
