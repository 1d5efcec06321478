use crate::{Error, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. QUOTEDESK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.quotedesk
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("QUOTEDESK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("quotedesk"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".quotedesk"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Demo logins. There is no account database behind these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub contractor: Credentials,
    pub client: Credentials,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            contractor: Credentials {
                email: "engineer@contractorpro.com".to_string(),
                password: "admin123".to_string(),
            },
            client: Credentials {
                email: "client@contractorpro.com".to_string(),
                password: "client123".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Origin serving `POST /chat`.
    pub base_url: String,
    #[serde(default = "default_chat_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_chat_timeout_ms() -> u64 {
    10_000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_ms: default_chat_timeout_ms(),
        }
    }
}

impl ChatConfig {
    pub fn endpoint(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Fixed zone for dashboard timestamps; local zone when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl DisplayConfig {
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>> {
        match self.utc_offset_minutes {
            None => Ok(None),
            Some(minutes) => minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .map(Some)
                .ok_or_else(|| {
                    Error::Config(format!("utc_offset_minutes out of range: {}", minutes))
                }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_credentials() {
        let config = Config::default();
        assert_eq!(config.auth.contractor.email, "engineer@contractorpro.com");
        assert_eq!(config.auth.client.password, "client123");
        assert_eq!(config.chat.endpoint(), "http://127.0.0.1:5000/chat");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.chat.base_url = "https://example.test/".to_string();
        config.display.utc_offset_minutes = Some(330);

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(loaded, config);
        assert_eq!(loaded.chat.endpoint(), "https://example.test/chat");
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[chat]\nbase_url = \"http://localhost:8080\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.chat.timeout_ms, 10_000);
        assert_eq!(loaded.auth, AuthConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[chat\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_utc_offset_range() {
        let display = DisplayConfig {
            utc_offset_minutes: Some(-300),
        };
        assert_eq!(
            display.utc_offset().unwrap(),
            FixedOffset::west_opt(5 * 3600)
        );

        let display = DisplayConfig {
            utc_offset_minutes: Some(24 * 60),
        };
        assert!(display.utc_offset().is_err());
    }

    #[test]
    fn test_huge_utc_offset_is_config_error() {
        let config: Config = toml::from_str("[display]\nutc_offset_minutes = 40000000\n").unwrap();
        let err = config.display.utc_offset().unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("40000000")));

        let display = DisplayConfig {
            utc_offset_minutes: Some(i32::MIN),
        };
        assert!(matches!(display.utc_offset(), Err(Error::Config(_))));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/desk"), PathBuf::from("/tmp/desk"));
    }
}
