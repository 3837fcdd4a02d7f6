use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Skill;

/// A user's bookmark on a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub skill_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Present when the backend joins the skill row into the listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<Skill>,
}
