use crate::credential::{TokenType, redact};
use crate::error::{Error, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://api.weeb.sh";
pub const ENV_BASE_URL: &str = "WEEBSH_BASE_URL";
pub const ENV_TOKEN: &str = "WEEBSH_TOKEN";
pub const ENV_TOKEN_TYPE: &str = "WEEBSH_TOKEN_TYPE";

/// Runtime configuration resolved from environment and optional config file.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub token_type: TokenType,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    base_url: Option<String>,
    token: Option<String>,
    token_type: Option<TokenType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigDoctor {
    pub base_url: String,
    pub token_redacted: Option<String>,
    pub token_type: TokenType,
    pub source: String,
    pub config_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            token_type: TokenType::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let file_config = match config_path() {
            Some(path) => read_config_file(&path)?,
            None => None,
        };
        let config = resolve(|key| std::env::var(key).ok(), file_config)?;

        tracing::debug!(
            base_url = %config.base_url,
            token_type = %config.token_type,
            has_token = config.token.is_some(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load from an explicit file, still letting the environment win.
    pub fn load_from(path: &Path) -> Result<Self> {
        resolve(|key| std::env::var(key).ok(), read_config_file(path)?)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let Some(path) = config_path() else {
            return Err(Error::InvalidConfig(
                "unable to determine config directory".into(),
            ));
        };
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                Error::InvalidConfig(format!("failed to create config dir: {err}"))
            })?;
        }
        let file_config = ConfigFile {
            base_url: Some(self.base_url.clone()),
            token: self.token.clone(),
            token_type: Some(self.token_type),
        };
        let serialized = toml::to_string_pretty(&file_config)
            .map_err(|err| Error::InvalidConfig(format!("failed to serialize config: {err}")))?;
        fs::write(path, serialized)
            .map_err(|err| Error::InvalidConfig(format!("failed to write config: {err}")))?;
        Ok(())
    }

    pub fn doctor(&self) -> ConfigDoctor {
        let source = if std::env::var(ENV_BASE_URL).is_ok() || std::env::var(ENV_TOKEN).is_ok() {
            "environment".to_string()
        } else {
            "config file / defaults".to_string()
        };
        ConfigDoctor {
            base_url: self.base_url.clone(),
            token_redacted: self.redacted_token(),
            token_type: self.token_type,
            source,
            config_path: config_path().map(|p| p.display().to_string()),
        }
    }

    pub fn redacted_token(&self) -> Option<String> {
        self.token.as_ref().map(|v| redact(v))
    }
}

pub fn parse_token_type(raw: &str) -> Result<TokenType> {
    raw.trim()
        .parse::<TokenType>()
        .map_err(|_| Error::InvalidConfig(format!("unknown token type: {raw}")))
}

/// Environment first, then the config file, then defaults. Blank values are
/// treated as unset at every level.
fn resolve(env: impl Fn(&str) -> Option<String>, file: Option<ConfigFile>) -> Result<Config> {
    let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());
    let file = file.unwrap_or_default();

    let base_url = lookup(ENV_BASE_URL)
        .or_else(|| file.base_url.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let token = lookup(ENV_TOKEN).or_else(|| file.token.filter(|v| !v.trim().is_empty()));

    let token_type = match lookup(ENV_TOKEN_TYPE) {
        Some(raw) => parse_token_type(&raw)?,
        None => file.token_type.unwrap_or_default(),
    };

    Ok(Config {
        base_url,
        token,
        token_type,
    })
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    let Ok(contents) = fs::read_to_string(path) else {
        return Ok(None);
    };
    toml::from_str::<ConfigFile>(&contents)
        .map(Some)
        .map_err(|err| Error::InvalidConfig(format!("config parse error: {err}")))
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("weebsh").join("config.toml"))
}
