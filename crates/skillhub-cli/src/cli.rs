use clap::{Parser, Subcommand};

/// Browse and install AI agent skills from SkillHub
#[derive(Debug, Parser)]
#[command(name = "skillhub", version)]
pub struct Cli {
    /// Backend base URL (overrides config and SKILLHUB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the marketplace
    #[command(subcommand)]
    Skills(SkillsCommand),
    /// Manage your account session
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Manage favorite skills
    #[command(subcommand)]
    Favorites(FavoritesCommand),
}

#[derive(Debug, Subcommand)]
pub enum SkillsCommand {
    /// List skills page by page
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Sort key understood by the backend (e.g. stars, downloads, updated)
        #[arg(long)]
        sort: Option<String>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Show a skill's details
    Show {
        id: String,
        /// Include the README
        #[arg(long)]
        readme: bool,
        /// Include SKILL.md
        #[arg(long = "skill-md")]
        skill_md: bool,
    },
    /// Print a time-limited download URL
    Download { id: String },
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, env = "SKILLHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "SKILLHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the signed-in user
    Me,
    /// Forget the stored session
    Logout,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List your favorites
    List,
    /// Favorite a skill
    Add { skill_id: String },
    /// Remove a favorite by its id
    Remove { id: String },
}
