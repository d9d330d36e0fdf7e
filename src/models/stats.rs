use serde::{Deserialize, Serialize};

/// Aggregate story/point counts nested under projects, epics and labels.
/// The API omits counts it has not computed, so every field is optional.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stories: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_points: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stories_done: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stories_started: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stories_unstarted: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_points_done: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_points_started: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_points_unstarted: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_story_update: Option<String>,
}
