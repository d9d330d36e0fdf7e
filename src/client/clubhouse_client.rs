use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::clubhouse_error;
use crate::constants::CLUBHOUSE_API_URL;
use crate::error::{ClubhouseError, ClubhouseResult};
use crate::logging::log_debug;
use crate::models::*;

pub struct ClubhouseClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl ClubhouseClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, CLUBHOUSE_API_URL)
    }

    /// Point the client at a different server, e.g. a mock in tests.
    pub fn with_base_url(token: String, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    async fn get_raw(&self, path: &str) -> ClubhouseResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        log_debug(&format!("GET {}", url));

        let response = self
            .client
            .get(&url)
            .query(&[("token", &self.token)])
            .send()
            .await
            .map_err(|e| clubhouse_error!(TransportError, "GET {} failed: {}", path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(clubhouse_error!(
                TransportError,
                "GET {} returned {}",
                path,
                status
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| clubhouse_error!(DecodeError, "GET {} returned invalid JSON: {}", path, e))
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ClubhouseResult<Vec<T>> {
        let body = self.get_raw(path).await?;
        if !body.is_array() {
            return Err(clubhouse_error!(
                DecodeError,
                "GET {} did not return an array",
                path
            ));
        }

        serde_json::from_value(body).map_err(|e| {
            clubhouse_error!(DecodeError, "GET {} returned unexpected shape: {}", path, e)
        })
    }

    pub async fn get_projects(&self) -> ClubhouseResult<Vec<Project>> {
        let projects: Vec<Project> = self.get_list("projects").await?;
        Ok(projects.into_iter().filter(|p| !p.archived).collect())
    }

    pub async fn get_epics(&self) -> ClubhouseResult<Vec<Epic>> {
        let epics: Vec<Epic> = self.get_list("epics").await?;
        Ok(epics.into_iter().filter(|e| !e.archived).collect())
    }

    pub async fn get_members(&self) -> ClubhouseResult<Vec<Member>> {
        self.get_list("members").await
    }

    pub async fn get_teams(&self) -> ClubhouseResult<Vec<Team>> {
        self.get_list("teams").await
    }

    /// Labels whose names follow the sprint naming convention. The labels
    /// endpoint has been seen answering with an error object instead of an
    /// array; that case means "no sprints" here, unlike the other fetchers
    /// which fail decoding.
    pub async fn get_sprints(&self) -> ClubhouseResult<Vec<Label>> {
        let body = self.get_raw("labels").await?;
        if !body.is_array() {
            return Ok(Vec::new());
        }

        let labels: Vec<Label> = serde_json::from_value(body).map_err(|e| {
            clubhouse_error!(DecodeError, "GET labels returned unexpected shape: {}", e)
        })?;

        Ok(labels.into_iter().filter(|l| l.is_sprint()).collect())
    }

    /// Create one story from a draft. Not idempotent: each call creates a
    /// new story server-side.
    pub async fn create_story(&self, draft: &StoryDraft) -> ClubhouseResult<Story> {
        if draft.name.trim().is_empty() {
            return Err(clubhouse_error!(
                ValidationError,
                "story name must not be empty"
            ));
        }

        let body = create_story_body(draft);
        let url = format!("{}/stories", self.base_url);
        log_debug(&format!("POST {}", url));

        let response = self
            .client
            .post(&url)
            .query(&[("token", &self.token)])
            .json(&body)
            .send()
            .await
            .map_err(|e| clubhouse_error!(TransportError, "POST stories failed: {}", e))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
            let detail = response.text().await.unwrap_or_default();
            return Err(clubhouse_error!(
                ValidationError,
                "story rejected ({}): {}",
                status,
                detail
            ));
        }
        if !status.is_success() {
            return Err(clubhouse_error!(
                TransportError,
                "POST stories returned {}",
                status
            ));
        }

        response.json::<Story>().await.map_err(|e| {
            clubhouse_error!(
                DecodeError,
                "create story response has unexpected shape: {}",
                e
            )
        })
    }
}

/// The creation payload carries exactly name, project_id, description,
/// story_type, epic_id and labels from the draft, plus owner_ids normalized
/// to a list when present. Everything else on the draft is dropped.
fn create_story_body(draft: &StoryDraft) -> Value {
    let mut body = json!({
        "name": draft.name,
        "project_id": draft.project_id,
    });

    if let Some(ref description) = draft.description {
        body["description"] = json!(description);
    }
    if let Some(ref story_type) = draft.story_type {
        body["story_type"] = json!(story_type);
    }
    if let Some(epic_id) = draft.epic_id {
        body["epic_id"] = json!(epic_id);
    }
    if let Some(ref labels) = draft.labels {
        body["labels"] = json!(labels);
    }
    if let Some(ref owners) = draft.owner_ids {
        body["owner_ids"] = json!(owners.to_vec());
    }

    body
}
