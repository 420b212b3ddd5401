use serde::{Deserialize, Serialize};

use super::connection_type::ConnectionType;
use super::id::ConnectionId;

/// Type-specific settings of a connection (token, URL, paths, ...).
pub type ConnectionConfig = serde_json::Map<String, serde_json::Value>;

/// A named, typed reference to an external data source.
///
/// `connection_type` is fixed at creation; updates only touch `name` and `config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    #[serde(default, deserialize_with = "config_or_empty")]
    pub config: ConnectionConfig,
}

impl Connection {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        connection_type: impl Into<String>,
        config: ConnectionConfig,
    ) -> Self {
        Self {
            id: ConnectionId::from_string(id),
            name: name.into(),
            connection_type: ConnectionType::new(connection_type),
            config,
        }
    }

    pub fn supports_reindex(&self) -> bool {
        self.connection_type.supports_reindex()
    }
}

/// Accepts a missing or `null` config as an empty mapping.
fn config_or_empty<'de, D>(deserializer: D) -> Result<ConnectionConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let config: Option<ConnectionConfig> = Option::deserialize(deserializer)?;
    Ok(config.unwrap_or_default())
}
