use crate::domain::{
    Connection, ConnectionConfig, ConnectionId, ConnectionType, ReindexResponse, TestResult,
};
use crate::form_state::FieldUpdate;
use crate::ports::RepositoryError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,

    // Dialog lifecycle
    OpenDialog,
    CloseDialog,

    // Page transitions
    AddClick,
    EditClick(Connection),
    Back,

    // Form editing
    SetField(FieldUpdate),
    ChangeType(ConnectionType),
    ReplaceConfig(ConnectionConfig),
    ResetForm {
        edit_mode: bool,
    },

    // Loading
    LoadAll,
    ConnectionsLoaded {
        connections: Vec<Connection>,
        types: Vec<ConnectionType>,
    },
    ConnectionsLoadFailed(RepositoryError),

    // Test
    TestConnection,
    TestCompleted(TestResult),
    TestFailed(RepositoryError),

    // Create / update
    /// Create on the add page, update on the edit page.
    Submit,
    SubmitCreate,
    ConnectionCreated(Connection),
    CreateFailed(RepositoryError),
    SubmitUpdate,
    ConnectionUpdated(Connection),
    UpdateFailed(RepositoryError),

    // Delete
    DeleteConnection(ConnectionId),
    ConnectionDeleted {
        id: ConnectionId,
        name: String,
        deleted: bool,
    },
    DeleteFailed {
        id: ConnectionId,
        name: String,
        error: RepositoryError,
    },

    // Re-index
    ReindexConnection(ConnectionId),
    ReindexCompleted {
        id: ConnectionId,
        name: String,
        response: ReindexResponse,
    },
    ReindexFailed {
        id: ConnectionId,
        name: String,
        error: RepositoryError,
    },
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    /// Resolutions of remote calls, sent back by the effect runner.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Action::ConnectionsLoaded { .. }
                | Action::ConnectionsLoadFailed(_)
                | Action::TestCompleted(_)
                | Action::TestFailed(_)
                | Action::ConnectionCreated(_)
                | Action::CreateFailed(_)
                | Action::ConnectionUpdated(_)
                | Action::UpdateFailed(_)
                | Action::ConnectionDeleted { .. }
                | Action::DeleteFailed { .. }
                | Action::ReindexCompleted { .. }
                | Action::ReindexFailed { .. }
        )
    }
}
