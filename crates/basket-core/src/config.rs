use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LIST_FILE_NAME: &str = "list.json";

/// User configuration loaded from the platform config directory.
///
/// Missing or unreadable config falls back to defaults; a broken config
/// file never prevents startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default list file used when neither the CLI argument nor the
    /// environment variable names one.
    #[serde(default)]
    pub list_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/basket/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("basket").join("config.toml"))
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// The list file to operate on when none was given explicitly.
    pub fn effective_list_path(&self) -> PathBuf {
        if let Some(ref path) = self.list_path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|data| data.join("basket").join(LIST_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LIST_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_default() {
        let config = AppConfig {
            list_path: Some(PathBuf::from("/tmp/groceries.json")),
        };
        assert_eq!(
            config.effective_list_path(),
            PathBuf::from("/tmp/groceries.json")
        );
    }

    #[test]
    fn default_path_ends_with_list_file() {
        let config = AppConfig::default();
        let path = config.effective_list_path();
        assert!(path.ends_with(LIST_FILE_NAME));
    }
}
