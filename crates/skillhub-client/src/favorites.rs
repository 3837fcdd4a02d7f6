//! Favorites operations

use reqwest::Method;
use serde::Serialize;
use skillhub_types::Favorite;
use tracing::debug;

use crate::client::SkillHubClient;
use crate::error::Result;

#[derive(Serialize)]
struct NewFavorite<'a> {
    skill_id: &'a str,
}

/// `/api/favorites` endpoints
pub struct FavoritesApi<'a> {
    client: &'a SkillHubClient,
}

impl<'a> FavoritesApi<'a> {
    pub(crate) fn new(client: &'a SkillHubClient) -> Self {
        Self { client }
    }

    /// The caller's favorites
    ///
    /// # Errors
    /// Fails on transport errors, non-2xx responses or an unexpected body
    pub async fn list(&self) -> Result<Vec<Favorite>> {
        let url = self.client.endpoint(&["api", "favorites"])?;
        self.client
            .send_json(self.client.request(Method::GET, url))
            .await
    }

    /// Favorite a skill
    ///
    /// # Errors
    /// Fails on transport errors, non-2xx responses or an unexpected body
    pub async fn add(&self, skill_id: &str) -> Result<Favorite> {
        let url = self.client.endpoint(&["api", "favorites"])?;
        let favorite: Favorite = self
            .client
            .send_json(
                self.client
                    .request(Method::POST, url)
                    .json(&NewFavorite { skill_id }),
            )
            .await?;
        debug!(favorite_id = %favorite.id, skill_id, "favorite added");
        Ok(favorite)
    }

    /// Delete a favorite by its own id (not the skill id). Any 2xx body is
    /// accepted, including an empty one.
    ///
    /// # Errors
    /// Fails on transport errors or non-2xx responses
    pub async fn remove(&self, id: &str) -> Result<()> {
        let url = self.client.endpoint(&["api", "favorites", id])?;
        self.client
            .send(self.client.request(Method::DELETE, url))
            .await?;
        debug!(favorite_id = id, "favorite removed");
        Ok(())
    }
}
