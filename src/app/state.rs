use crate::config::DialogConfig;
use crate::domain::{Connection, ConnectionId, TypeCatalog};
use crate::form_state::ConnectionFormState;
use crate::outcome::Outcomes;
use crate::page::Page;
use crate::reindex_tracker::ReindexTracker;

/// Connections shown on the list page.
#[derive(Debug, Clone, Default)]
pub struct ConnectionList {
    pub connections: Vec<Connection>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ConnectionList {
    pub fn find(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| &c.id == id)
    }

    /// Replaces the connection with the same id, or appends it.
    pub fn upsert(&mut self, connection: Connection) {
        match self.connections.iter_mut().find(|c| c.id == connection.id) {
            Some(existing) => *existing = connection,
            None => self.connections.push(connection),
        }
    }

    pub fn remove(&mut self, id: &ConnectionId) -> Option<Connection> {
        let index = self.connections.iter().position(|c| &c.id == id)?;
        Some(self.connections.remove(index))
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

/// Everything the dialog owns. External code reads it; only the reducer writes it.
#[derive(Debug, Clone)]
pub struct DialogState {
    pub is_open: bool,
    pub initial_page: Page,
    pub form: ConnectionFormState,
    pub list: ConnectionList,
    pub catalog: TypeCatalog,
    pub reindex: ReindexTracker,
    pub outcomes: Outcomes,
}

impl DialogState {
    pub fn new(config: &DialogConfig) -> Self {
        Self {
            is_open: false,
            initial_page: config.initial_page,
            form: ConnectionFormState::new(config.initial_page),
            list: ConnectionList::default(),
            catalog: TypeCatalog::default(),
            reindex: ReindexTracker::default(),
            outcomes: Outcomes::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.form.page
    }

    /// The back control is offered on the edit page, or anywhere when the
    /// dialog was opened on the list.
    pub fn can_go_back(&self) -> bool {
        self.form.page == Page::Edit || self.initial_page == Page::List
    }

    pub fn can_reindex(&self, id: &ConnectionId) -> bool {
        !self.list.loading && !self.reindex.is_in_flight(id)
    }

    /// Display name for notifications; falls back to the id for unknown connections.
    pub fn connection_label(&self, id: &ConnectionId) -> String {
        self.list
            .find(id)
            .map_or_else(|| id.to_string(), |c| c.name.clone())
    }
}
