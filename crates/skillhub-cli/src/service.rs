use crate::cli::{AuthCommand, Command, FavoritesCommand, SkillsCommand};
use crate::config::Config;
use crate::render::{self, DetailSections};
use anyhow::{anyhow, Result};
use skillhub_client::{LogNavigator, SkillHubClient};
use skillhub_types::SkillQuery;
use std::sync::Arc;
use tracing::{debug, info};

/// Command runner - wires config, session storage and the API client
pub struct SkillHubService {
    config: Config,
}

impl SkillHubService {
    /// Create a new service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run a single command
    pub async fn run(self, command: Command, log_level: Option<String>) -> Result<()> {
        // Initialize logging
        let level = log_level.unwrap_or_else(|| self.config.logging.level.clone());
        skillhub_logging::init_logging(&level)?;

        let store = self.config.session_store()?;
        debug!(path = %store.path().display(), "using session file");

        let client = SkillHubClient::new(&self.config.api, Arc::new(store), Arc::new(LogNavigator))?;
        info!(base_url = %client.base_url(), "running command");

        match command {
            Command::Skills(cmd) => Self::skills(&client, cmd).await,
            Command::Auth(cmd) => Self::auth(&client, cmd).await,
            Command::Favorites(cmd) => Self::favorites(&client, cmd).await,
        }
    }

    async fn skills(client: &SkillHubClient, command: SkillsCommand) -> Result<()> {
        match command {
            SkillsCommand::List {
                page,
                limit,
                sort,
                search,
                language,
            } => {
                let query = SkillQuery {
                    page,
                    limit,
                    sort,
                    search,
                    language,
                };
                let page = client.skills().list(&query).await?;
                if page.is_empty() {
                    println!("No skills found.");
                }
                for skill in &page.data {
                    println!("{}", render::skill_line(skill));
                }
                println!("{}", render::page_footer(&page));
            }
            SkillsCommand::Show {
                id,
                readme,
                skill_md,
            } => match client.skills().get(&id).await {
                Ok(skill) => {
                    println!(
                        "{}",
                        render::skill_detail(&skill, DetailSections { readme, skill_md })
                    );
                }
                Err(e) if e.is_not_found() => return Err(anyhow!(render::not_found(&id))),
                Err(e) => return Err(e.into()),
            },
            SkillsCommand::Download { id } => {
                let link = client.skills().download(&id).await?;
                println!("{}", link.download_url);
            }
        }
        Ok(())
    }

    async fn auth(client: &SkillHubClient, command: AuthCommand) -> Result<()> {
        match command {
            AuthCommand::Register {
                email,
                name,
                password,
            } => {
                let resp = client
                    .auth()
                    .register(&email, &password, name.as_deref())
                    .await?;
                Self::report_session(client, &email, resp.token.is_some());
            }
            AuthCommand::Login { email, password } => {
                let resp = client.auth().login(&email, &password).await?;
                Self::report_session(client, &email, resp.token.is_some());
            }
            AuthCommand::Me => {
                let user = client.auth().me().await?;
                println!("{}", render::user_summary(&user));
            }
            AuthCommand::Logout => {
                client.auth().logout()?;
                println!("Signed out.");
            }
        }
        Ok(())
    }

    fn report_session(client: &SkillHubClient, email: &str, issued: bool) {
        if issued && client.session_store().get().is_some() {
            println!("Signed in as {email}.");
        } else {
            println!("Request accepted for {email}, but no session was issued.");
        }
    }

    async fn favorites(client: &SkillHubClient, command: FavoritesCommand) -> Result<()> {
        match command {
            FavoritesCommand::List => {
                let favorites = client.favorites().list().await?;
                if favorites.is_empty() {
                    println!("No favorites yet.");
                }
                for favorite in &favorites {
                    println!("{}", render::favorite_line(favorite));
                }
            }
            FavoritesCommand::Add { skill_id } => {
                let favorite = client.favorites().add(&skill_id).await?;
                println!("Added favorite {}.", favorite.id);
            }
            FavoritesCommand::Remove { id } => {
                client.favorites().remove(&id).await?;
                println!("Removed favorite {id}.");
            }
        }
        Ok(())
    }
}
