use serde::Deserialize;
use skillhub_client::config::BASE_URL_ENV;
use skillhub_client::{ClientConfig, FileSessionStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080"  # Set via SKILLHUB_API_URL env var

[session]
path = ""  # Empty: ~/.skillhub/session.json

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ClientConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillhub/skillhub.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".skillhub").join("skillhub.toml"))
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillhub/skillhub.toml (auto-created if missing)
    /// 2. Local override: ./skillhub.toml (workspace, optional)
    /// 3. Environment variables with SKILLHUB__ prefix
    /// 4. `SKILLHUB_API_URL`
    /// 5. `api_url` from the command line (highest priority)
    pub fn load(api_url: Option<String>) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let global_config_path = Self::ensure_global_config()?;

        let mut config_builder = config::Config::builder()
            .add_source(config::File::from(global_config_path))
            .add_source(config::File::with_name("skillhub").required(false))
            .add_source(config::Environment::with_prefix("SKILLHUB").separator("__"));

        if let Ok(url) = env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config_builder = config_builder.set_override("api.base_url", url)?;
            }
        }

        if let Some(url) = api_url {
            config_builder = config_builder.set_override("api.base_url", url)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Where the session token is persisted
    pub fn session_store(&self) -> anyhow::Result<FileSessionStore> {
        let path = self.session.path.trim();
        if path.is_empty() {
            return Ok(FileSessionStore::new()?);
        }

        // Expand tilde to home directory
        let expanded = match path.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
                .join(rest),
            None => PathBuf::from(path),
        };
        Ok(FileSessionStore::with_path(expanded))
    }
}
