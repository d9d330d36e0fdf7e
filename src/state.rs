use serde::Serialize;

use crate::client::ClubhouseClient;
use crate::config::Config;
use crate::error::{ClubhouseError, ClubhouseResult};
use crate::models::{Epic, Label, Member, Project, Team};

/// Everything one aggregate fetch returns, plus the configuration it ran
/// with. Built only when all five fetches succeed; never updated in place.
#[derive(Debug, Serialize, Clone)]
pub struct StateSnapshot {
    pub projects: Vec<Project>,
    pub epics: Vec<Epic>,
    pub members: Vec<Member>,
    pub teams: Vec<Team>,
    pub sprints: Vec<Label>,
    pub config: Config,
    pub loaded: bool,
}

impl ClubhouseClient {
    /// Fetch all five resources concurrently and assemble a snapshot.
    /// Fails as a whole on the first fetch error; in-flight requests are
    /// dropped, and no partial snapshot is ever produced.
    pub async fn get_state(&self, config: &Config) -> ClubhouseResult<StateSnapshot> {
        let (projects, epics, members, teams, sprints) = tokio::try_join!(
            self.get_projects(),
            self.get_epics(),
            self.get_members(),
            self.get_teams(),
            self.get_sprints(),
        )?;

        Ok(StateSnapshot {
            projects,
            epics,
            members,
            teams,
            sprints,
            config: config.clone(),
            loaded: true,
        })
    }
}

/// Aggregate fetch against the production API using the token from `config`.
pub async fn get_state(config: &Config) -> ClubhouseResult<StateSnapshot> {
    let token = config
        .api_token
        .clone()
        .ok_or(ClubhouseError::TokenNotFound)?;
    let client = ClubhouseClient::new(token);
    client.get_state(config).await
}
