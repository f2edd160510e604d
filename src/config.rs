use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the realtime database
    pub store_url: String,
    /// Collection the readings live under
    pub collection: String,
    /// Optional database secret sent as the `auth` query parameter
    pub auth_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: String::new(),
            collection: "leituras".to_string(),
            auth_token: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Self::default();

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Apply environment variable overrides
        if let Ok(store_url) = std::env::var("TEMPVIEW_STORE_URL") {
            config.store_url = store_url;
        }
        if let Ok(collection) = std::env::var("TEMPVIEW_COLLECTION") {
            config.collection = collection;
        }
        if let Ok(auth_token) = std::env::var("TEMPVIEW_AUTH_TOKEN") {
            config.auth_token = Some(auth_token);
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/tempview/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tempview")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    e
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.store_url.is_empty());
        assert_eq!(config.collection, "leituras");
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.collection, "leituras");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "store_url: https://station.example.com").unwrap();
        writeln!(file, "collection: medidas").unwrap();
        writeln!(file, "auth_token: secret").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.store_url, "https://station.example.com");
        assert_eq!(config.collection, "medidas");
        assert_eq!(config.auth_token, Some("secret".to_string()));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "store_url: [not, a, string").unwrap();

        assert!(matches!(
            Config::load(Some(config_path)),
            Err(ConfigError::ParseError(_, _))
        ));
    }
}
