pub mod config_file;

pub use config_file::{ConfigError, ConfigFile, default_config_path};
