use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::config::DialogConfig;
use crate::app::page::Page;
use crate::domain::ConnectionType;

const CONFIG_DIR_NAME: &str = "conndeck";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_TYPES: [&str; 4] = ["github", "jira", "filesystem", "code_index"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    NoConfigDir,
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("Invalid config format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub dialog: DialogSection,
    pub repository: RepositorySection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSection {
    pub initial_page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySection {
    /// Types offered by the in-memory repository, in display order.
    pub types: Vec<String>,
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            types: DEFAULT_TYPES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn dialog_config(&self) -> DialogConfig {
        DialogConfig {
            initial_page: self.dialog.initial_page,
        }
    }

    pub fn connection_types(&self) -> Vec<ConnectionType> {
        self.repository
            .types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(ConnectionType::new)
            .collect()
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    mod load_or_default {
        use super::*;

        #[test]
        fn missing_file_yields_defaults() {
            let temp_dir = TempDir::new().unwrap();

            let config =
                ConfigFile::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();

            assert_eq!(config, ConfigFile::default());
            assert_eq!(config.dialog_config().initial_page, Page::List);
            assert_eq!(config.connection_types().len(), 4);
        }

        #[test]
        fn reads_both_sections() {
            let temp_dir = TempDir::new().unwrap();
            let path = write_config(
                &temp_dir,
                r#"
[dialog]
initial_page = "add"

[repository]
types = ["jira", "github"]
"#,
            );

            let config = ConfigFile::load_or_default(&path).unwrap();

            assert_eq!(config.dialog_config().initial_page, Page::Add);
            assert_eq!(
                config.connection_types(),
                vec![ConnectionType::new("jira"), ConnectionType::new("github")]
            );
        }

        #[test]
        fn partial_file_keeps_other_defaults() {
            let temp_dir = TempDir::new().unwrap();
            let path = write_config(&temp_dir, "[dialog]\ninitial_page = \"edit\"\n");

            let config = ConfigFile::load_or_default(&path).unwrap();

            assert_eq!(config.dialog.initial_page, Page::Edit);
            assert_eq!(config.repository, RepositorySection::default());
        }

        #[test]
        fn blank_type_entries_are_skipped() {
            let temp_dir = TempDir::new().unwrap();
            let path = write_config(&temp_dir, "[repository]\ntypes = [\"github\", \" \"]\n");

            let config = ConfigFile::load_or_default(&path).unwrap();

            assert_eq!(config.connection_types(), vec![ConnectionType::new("github")]);
        }

        #[test]
        fn invalid_toml_is_an_error() {
            let temp_dir = TempDir::new().unwrap();
            let path = write_config(&temp_dir, "invalid toml {{{{");

            let result = ConfigFile::load_or_default(&path);

            assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
        }

        #[test]
        fn unknown_page_is_an_error() {
            let temp_dir = TempDir::new().unwrap();
            let path = write_config(&temp_dir, "[dialog]\ninitial_page = \"settings\"\n");

            assert!(matches!(
                ConfigFile::load_or_default(&path),
                Err(ConfigError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("conndeck/config.toml"));
        }
    }
}
