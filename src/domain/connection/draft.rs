use serde::Serialize;

use super::connection_type::ConnectionType;
use super::entity::{Connection, ConnectionConfig};
use super::id::ConnectionId;

/// Working copy of a connection used by the create/edit form.
///
/// `id` is present only while editing an existing connection.
/// `connection_type` is `None` until the type catalog has been loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConnectionDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ConnectionId>,
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: Option<ConnectionType>,
    pub config: ConnectionConfig,
}

impl ConnectionDraft {
    /// Empty draft preselecting `default_type`.
    pub fn new(default_type: Option<ConnectionType>) -> Self {
        Self {
            id: None,
            name: String::new(),
            connection_type: default_type,
            config: ConnectionConfig::new(),
        }
    }

    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            id: Some(connection.id.clone()),
            name: connection.name.clone(),
            connection_type: Some(connection.connection_type.clone()),
            config: connection.config.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn has_type(&self) -> bool {
        self.connection_type.is_some()
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
