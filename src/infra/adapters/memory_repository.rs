//! Process-local connection backend.
//!
//! Rejections mimic a FastAPI service: field validation failures carry a
//! `{"detail":[{"loc":[...],"msg":...}]}` body, everything else a plain
//! `{"detail":"..."}` string.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::app::ports::{ConnectionRepository, RepositoryError};
use crate::domain::{
    Connection, ConnectionDraft, ConnectionId, ConnectionName, ConnectionType, ReindexResponse,
    TestResult, TypeCatalog,
};

pub struct InMemoryConnectionRepository {
    catalog: TypeCatalog,
    connections: RwLock<Vec<Connection>>,
}

impl InMemoryConnectionRepository {
    pub fn new(types: Vec<ConnectionType>) -> Self {
        Self::with_connections(types, Vec::new())
    }

    pub fn with_connections(types: Vec<ConnectionType>, connections: Vec<Connection>) -> Self {
        Self {
            catalog: TypeCatalog::new(types),
            connections: RwLock::new(connections),
        }
    }

    fn validate(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<(ConnectionName, ConnectionType), RepositoryError> {
        let mut errors = Vec::new();

        let name = ConnectionName::new(draft.name.as_str()).ok();
        if name.is_none() {
            errors.push(field_error(&["body", "name"], "Field required"));
        }

        match &draft.connection_type {
            None => errors.push(field_error(&["body", "type"], "Field required")),
            Some(ty) if !self.catalog.contains(ty) => {
                let allowed: Vec<String> = self.catalog.iter().map(|t| format!("'{}'", t)).collect();
                errors.push(field_error(
                    &["body", "type"],
                    &format!("Input should be {}", allowed.join(" or ")),
                ));
            }
            Some(_) => {}
        }

        match (name, draft.connection_type.clone()) {
            (Some(name), Some(ty)) if errors.is_empty() => Ok((name, ty)),
            _ => Err(validation_failed(errors)),
        }
    }
}

fn field_error(loc: &[&str], msg: &str) -> serde_json::Value {
    json!({ "type": "value_error", "loc": loc, "msg": msg })
}

fn validation_failed(errors: Vec<serde_json::Value>) -> RepositoryError {
    RepositoryError::Rejected(json!({ "detail": errors }).to_string())
}

fn rejected(detail: &str) -> RepositoryError {
    RepositoryError::Rejected(json!({ "detail": detail }).to_string())
}

fn is_taken(connections: &[Connection], name: &ConnectionName, except: Option<&ConnectionId>) -> bool {
    connections
        .iter()
        .filter(|c| Some(&c.id) != except)
        .any(|c| c.name.trim().to_lowercase() == name.normalized())
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError> {
        Ok(self.connections.read().await.clone())
    }

    async fn list_available_types(&self) -> Result<Vec<ConnectionType>, RepositoryError> {
        Ok(self.catalog.iter().cloned().collect())
    }

    async fn test_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<TestResult, RepositoryError> {
        let Some(ty) = &draft.connection_type else {
            return Err(validation_failed(vec![field_error(
                &["body", "type"],
                "Field required",
            )]));
        };
        if !self.catalog.contains(ty) {
            return Err(rejected(&format!("Unsupported connection type: {}", ty)));
        }
        if draft.config.is_empty() {
            return Ok(TestResult::failure(format!(
                "No configuration provided for {}",
                ty.label()
            )));
        }
        Ok(TestResult::success(format!(
            "{} configuration looks valid",
            ty.label()
        )))
    }

    async fn create_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<Connection, RepositoryError> {
        let (name, ty) = self.validate(draft)?;
        let mut connections = self.connections.write().await;
        if is_taken(&connections, &name, None) {
            return Err(rejected(&format!(
                "A connection named '{}' already exists",
                name
            )));
        }

        let connection = Connection {
            id: ConnectionId::generate(),
            name: name.as_str().to_string(),
            connection_type: ty,
            config: draft.config.clone(),
        };
        debug!(id = %connection.id, "connection stored");
        connections.push(connection.clone());
        Ok(connection)
    }

    async fn update_connection(
        &self,
        id: &ConnectionId,
        draft: &ConnectionDraft,
    ) -> Result<Connection, RepositoryError> {
        let (name, ty) = self.validate(draft)?;
        let mut connections = self.connections.write().await;
        if is_taken(&connections, &name, Some(id)) {
            return Err(rejected(&format!(
                "A connection named '{}' already exists",
                name
            )));
        }

        let Some(existing) = connections.iter_mut().find(|c| &c.id == id) else {
            return Err(rejected("Connection not found"));
        };
        if existing.connection_type != ty {
            return Err(rejected("Connection type cannot be changed"));
        }
        existing.name = name.as_str().to_string();
        existing.config = draft.config.clone();
        Ok(existing.clone())
    }

    async fn delete_connection(&self, id: &ConnectionId) -> Result<bool, RepositoryError> {
        let mut connections = self.connections.write().await;
        let before = connections.len();
        connections.retain(|c| &c.id != id);
        Ok(connections.len() < before)
    }

    async fn reindex_connection(
        &self,
        id: &ConnectionId,
    ) -> Result<ReindexResponse, RepositoryError> {
        let connections = self.connections.read().await;
        let Some(connection) = connections.iter().find(|c| &c.id == id) else {
            return Err(rejected("Connection not found"));
        };
        if !connection.supports_reindex() {
            return Err(rejected(&format!(
                "Re-indexing is only supported for {} connections",
                ConnectionType::CODE_INDEX
            )));
        }
        Ok(ReindexResponse::with_message(format!(
            "Re-index queued for {}",
            connection.name
        )))
    }
}
