use serde::{Deserialize, Serialize};

use super::Stats;
use crate::constants::SPRINT_NAME_RE;

/// A label as returned by the labels endpoint. The API has no first-class
/// sprint concept; a label whose name starts with "sprint ending" is treated
/// as a sprint by naming convention.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Label {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}

impl Label {
    pub fn is_sprint(&self) -> bool {
        SPRINT_NAME_RE.is_match(&self.name)
    }
}
