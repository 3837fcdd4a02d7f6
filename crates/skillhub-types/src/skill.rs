use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::null_as_default;

/// A skill listed on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub github_owner: String,
    pub github_repo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub install_command: Option<String>,
    /// Price in the marketplace's unit; 0 means free.
    #[serde(default, deserialize_with = "price_from_json")]
    pub price: f64,
    /// Verified by the marketplace
    #[serde(default, deserialize_with = "null_as_default")]
    pub marketplace: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloaded_count: u64,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
    /// Raw SKILL.md
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme_content: Option<String>,
}

impl Skill {
    /// Whether the skill must be bought before it can be installed
    pub fn requires_purchase(&self) -> bool {
        self.price > 0.0
    }

    pub fn is_free(&self) -> bool {
        !self.requires_purchase()
    }

    /// `owner/repo`
    pub fn repository(&self) -> String {
        format!("{}/{}", self.github_owner, self.github_repo)
    }

    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.repository())
    }
}

/// Prices come from a decimal column; some backends encode them as strings.
fn price_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawPrice::Number(n)) => Ok(n),
        Some(RawPrice::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Time-limited URL for a skill's installable artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub download_url: String,
}

/// Filters for listing skills. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SkillQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
