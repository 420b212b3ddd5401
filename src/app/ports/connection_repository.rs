use async_trait::async_trait;

use crate::domain::{
    Connection, ConnectionDraft, ConnectionId, ConnectionType, ReindexResponse, TestResult,
};

/// Failure reported by the connection backend.
///
/// Both variants carry the raw message text; structured payloads (JSON with a
/// `detail` field) are decoded later by the error normalizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The backend answered and refused the request.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced an answer.
    #[error("{0}")]
    Transport(String),
}

impl RepositoryError {
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(msg) | Self::Transport(msg) => msg,
        }
    }
}

#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError>;

    /// Ordered; the first entry is the default selection for new drafts.
    async fn list_available_types(&self) -> Result<Vec<ConnectionType>, RepositoryError>;

    async fn test_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<TestResult, RepositoryError>;

    async fn create_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<Connection, RepositoryError>;

    async fn update_connection(
        &self,
        id: &ConnectionId,
        draft: &ConnectionDraft,
    ) -> Result<Connection, RepositoryError>;

    async fn delete_connection(&self, id: &ConnectionId) -> Result<bool, RepositoryError>;

    async fn reindex_connection(
        &self,
        id: &ConnectionId,
    ) -> Result<ReindexResponse, RepositoryError>;
}
