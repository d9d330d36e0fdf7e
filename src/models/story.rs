use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A story as returned by the API after creation or fetch.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Story {
    pub id: u64,
    pub name: String,
    pub project_id: u64,
    pub story_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follower_ids: Vec<String>,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    // Nested payloads whose internal shape this client does not use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<Vec<Value>>,
}

/// Creation input for a story. Only `name` and `project_id` are required;
/// the creation call picks the fields it sends, so a draft may carry more
/// than ends up in the request.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoryDraft {
    pub name: String,
    pub project_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_ids: Option<OwnerIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_state_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl StoryDraft {
    pub fn new(name: impl Into<String>, project_id: u64) -> Self {
        StoryDraft {
            name: name.into(),
            project_id,
            description: None,
            story_type: None,
            epic_id: None,
            labels: None,
            owner_ids: None,
            estimate: None,
            deadline: None,
            workflow_state_id: None,
            created_at: None,
            completed_at: None,
        }
    }
}

/// Owner ids on a draft: either a single id or a list. The creation request
/// always sends a list.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum OwnerIds {
    One(String),
    Many(Vec<String>),
}

impl OwnerIds {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            OwnerIds::One(id) => vec![id.clone()],
            OwnerIds::Many(ids) => ids.clone(),
        }
    }
}

impl From<&str> for OwnerIds {
    fn from(id: &str) -> Self {
        OwnerIds::One(id.to_string())
    }
}

impl From<Vec<String>> for OwnerIds {
    fn from(ids: Vec<String>) -> Self {
        OwnerIds::Many(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_ids_scalar_wraps_to_list() {
        let owners = OwnerIds::One("user-1".to_string());
        assert_eq!(owners.to_vec(), vec!["user-1".to_string()]);
    }

    #[test]
    fn test_owner_ids_list_passes_through() {
        let owners = OwnerIds::Many(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(owners.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_owner_ids_deserializes_from_scalar_or_list() {
        let scalar: OwnerIds = serde_json::from_str(r#""user-1""#).unwrap();
        assert_eq!(scalar, OwnerIds::One("user-1".to_string()));

        let list: OwnerIds = serde_json::from_str(r#"["user-1", "user-2"]"#).unwrap();
        assert_eq!(
            list,
            OwnerIds::Many(vec!["user-1".to_string(), "user-2".to_string()])
        );
    }

    #[test]
    fn test_story_round_trips_without_field_loss() {
        let body = serde_json::json!({
            "id": 7,
            "name": "Fix login",
            "project_id": 42,
            "story_type": "bug",
            "description": "Session drops on refresh",
            "epic_id": 3,
            "owner_ids": ["user-1"],
            "started": false,
            "completed": false,
            "archived": false,
            "created_at": "2016-05-10T12:00:00Z",
            "updated_at": "2016-05-10T12:00:00Z",
            "labels": [{"name": "Sprint Ending 5/12"}]
        });

        let story: Story = serde_json::from_value(body.clone()).unwrap();
        let reencoded = serde_json::to_value(&story).unwrap();
        for (key, value) in body.as_object().unwrap() {
            assert_eq!(reencoded.get(key), Some(value), "field {} lost", key);
        }
    }
}
