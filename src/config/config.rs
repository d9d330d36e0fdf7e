use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::constants::{API_TOKEN_ENV, CONFIG_FILE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api_token: Option<String>,
    pub default_project_id: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: None,
            default_project_id: None,
        }
    }
}

impl Config {
    pub fn with_token(token: impl Into<String>) -> Self {
        Config {
            api_token: Some(token.into()),
            default_project_id: None,
        }
    }
}

pub fn load_config() -> Config {
    let home_dir = dirs::home_dir().expect("Could not find home directory");
    read_config(&home_dir.join(CONFIG_FILE))
}

fn read_config(config_path: &Path) -> Config {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path).expect("Failed to read config file");
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

pub fn get_api_token() -> Result<String, Box<dyn std::error::Error>> {
    // First check environment variable
    if let Ok(token) = env::var(API_TOKEN_ENV) {
        return Ok(token);
    }

    // Then check config file
    let config = load_config();
    if let Some(token) = config.api_token {
        return Ok(token);
    }

    Err("No API token found. Set CLUBHOUSE_API_TOKEN environment variable or run 'clubhouse auth' to configure.".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_is_empty() {
        let config = Config::default();
        assert!(config.api_token.is_none());
        assert!(config.default_project_id.is_none());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config {
            api_token: Some("abc123".to_string()),
            default_project_id: Some(42),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_with_token() {
        let config = Config::with_token("secret");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_read_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "api_token": "abc123", "default_project_id": 7 }"#,
        )
        .unwrap();

        let config = read_config(&path);
        assert_eq!(config.api_token.as_deref(), Some("abc123"));
        assert_eq!(config.default_project_id, Some(7));
    }

    #[test]
    fn test_read_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_config_garbage_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let config = read_config(&path);
        assert_eq!(config, Config::default());
    }
}
