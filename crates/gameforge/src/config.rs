//! Application configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`gameforge.toml` shipped with the crate)
//! 2. `~/.config/gameforge/gameforge.toml`
//! 3. `./gameforge.toml`
//! 4. `GAMEFORGE_*` environment variables
//!
//! User files are optional and silently skipped when absent.

use config::{Config, Environment, File, FileFormat};
use gameforge_error::{ConfigError, GameforgeError, GameforgeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../gameforge.toml");

/// Environment variable read when no token is configured.
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Settings consumed by the composition root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameforgeConfig {
    /// Text model id
    pub text_model: String,
    /// Image model id
    pub image_model: String,
    /// HuggingFace API token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// OpenAI-compatible router base URL
    pub chat_base_url: String,
    /// Inference API base URL
    pub inference_base_url: String,
    /// Directory receiving rendered images
    pub media_root: PathBuf,
    /// Public URL prefix of the media directory
    pub media_url: String,
    /// Characters requested per game
    pub default_character_count: usize,
    /// Directory of saved games
    pub games_dir: PathBuf,
}

impl Default for GameforgeConfig {
    fn default() -> Self {
        Self {
            text_model: "Qwen/Qwen2.5-7B-Instruct".to_string(),
            image_model: "stabilityai/stable-diffusion-2-1".to_string(),
            api_token: None,
            chat_base_url: "https://router.huggingface.co/v1".to_string(),
            inference_base_url: "https://api-inference.huggingface.co/models".to_string(),
            media_root: PathBuf::from("media"),
            media_url: "/media/".to_string(),
            default_character_count: 3,
            games_dir: PathBuf::from("games"),
        }
    }
}

fn build_error(e: config::ConfigError) -> GameforgeError {
    GameforgeError::from(ConfigError::new(format!(
        "Failed to build configuration: {}",
        e
    )))
}

fn parse_error(e: config::ConfigError) -> GameforgeError {
    GameforgeError::from(ConfigError::new(format!(
        "Failed to parse configuration: {}",
        e
    )))
}

impl GameforgeConfig {
    /// Load configuration from the standard sources.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gameforge::GameforgeConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = GameforgeConfig::load()?;
    /// println!("text model: {}", config.text_model);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> GameforgeResult<Self> {
        Self::load_with_override(None)
    }

    /// Load configuration from the standard sources, with `path` layered
    /// above the user files when given.
    #[instrument]
    pub fn load_with_override(path: Option<&Path>) -> GameforgeResult<Self> {
        debug!("Loading configuration: env > override > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/gameforge/gameforge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("gameforge").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix("GAMEFORGE").try_parsing(true));

        let config: Self = builder
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)?;

        config.validate()?;
        Ok(config.with_token_from_env())
    }

    /// Load configuration from a single file.
    ///
    /// Keys missing from the file take their default values.
    pub fn from_file(path: impl AsRef<Path>) -> GameforgeResult<Self> {
        debug!(path = %path.as_ref().display(), "Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                GameforgeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(parse_error)?;

        config.validate()?;
        Ok(config.with_token_from_env())
    }

    /// Reject settings the pipeline cannot honor.
    ///
    /// Every game needs at least one character.
    pub fn validate(&self) -> GameforgeResult<()> {
        if self.default_character_count == 0 {
            return Err(ConfigError::new("default_character_count must be at least 1").into());
        }
        Ok(())
    }

    /// Fill a missing or blank `api_token` from [`TOKEN_ENV_VAR`].
    pub fn with_token_from_env(mut self) -> Self {
        let configured = self
            .api_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty());
        if !configured {
            self.api_token = std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|token| !token.trim().is_empty());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_default_impl() {
        let bundled: GameforgeConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(bundled, GameforgeConfig::default());
    }

    #[test]
    fn test_configured_token_is_kept() {
        let config = GameforgeConfig {
            api_token: Some("hf_configured".to_string()),
            ..GameforgeConfig::default()
        };
        assert_eq!(
            config.with_token_from_env().api_token.as_deref(),
            Some("hf_configured")
        );
    }
}
