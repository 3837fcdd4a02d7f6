//! Skills operations

use reqwest::Method;
use skillhub_types::{DownloadLink, PaginatedResponse, Skill, SkillQuery};
use tracing::debug;

use crate::client::SkillHubClient;
use crate::error::Result;

/// `/api/skills` endpoints
pub struct SkillsApi<'a> {
    client: &'a SkillHubClient,
}

impl<'a> SkillsApi<'a> {
    pub(crate) fn new(client: &'a SkillHubClient) -> Self {
        Self { client }
    }

    /// Fetch one page of skills. Only the filters set on `query` are sent.
    ///
    /// # Errors
    /// Fails on transport errors, non-2xx responses or an unexpected body
    pub async fn list(&self, query: &SkillQuery) -> Result<PaginatedResponse<Skill>> {
        let url = self.client.endpoint(&["api", "skills"])?;
        let page: PaginatedResponse<Skill> = self
            .client
            .send_json(self.client.request(Method::GET, url).query(query))
            .await?;
        debug!(
            page = page.page,
            total_pages = page.total_pages,
            count = page.data.len(),
            "skills page fetched"
        );
        Ok(page)
    }

    /// Fetch a single skill.
    ///
    /// # Errors
    /// Returns [`crate::ClientError::NotFound`] when the backend has no such skill
    pub async fn get(&self, id: &str) -> Result<Skill> {
        let url = self.client.endpoint(&["api", "skills", id])?;
        self.client
            .send_json(self.client.request(Method::GET, url))
            .await
    }

    /// Fetch a time-limited download URL for the skill's artifact.
    ///
    /// # Errors
    /// Fails on transport errors, non-2xx responses or an unexpected body
    pub async fn download(&self, id: &str) -> Result<DownloadLink> {
        let url = self.client.endpoint(&["api", "skills", id, "download"])?;
        self.client
            .send_json(self.client.request(Method::GET, url))
            .await
    }
}
