#![allow(dead_code, reason = "each test binary uses a different subset of the harness")]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use conndeck::app::config::DialogConfig;
use conndeck::app::controller::ConnectionsDialog;
use conndeck::app::page::Page;
use conndeck::app::ports::{
    CloseNotifier, ConnectionRepository, Notification, Notifier, RepositoryError,
};
use conndeck::domain::{
    Connection, ConnectionDraft, ConnectionId, ConnectionType, ReindexResponse, TestResult,
};
use conndeck::infra::adapters::InMemoryConnectionRepository;

/// Collects notifications and close calls for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
    closed: AtomicUsize,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl CloseNotifier for RecordingNotifier {
    fn dialog_closed(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wraps a repository and counts calls per operation.
pub struct CountingRepository<R> {
    inner: R,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
    pub reindexes: AtomicUsize,
}

impl<R> CountingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            reindexes: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl<R: ConnectionRepository> ConnectionRepository for CountingRepository<R> {
    async fn list_connections(&self) -> Result<Vec<Connection>, RepositoryError> {
        self.inner.list_connections().await
    }

    async fn list_available_types(&self) -> Result<Vec<ConnectionType>, RepositoryError> {
        self.inner.list_available_types().await
    }

    async fn test_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<TestResult, RepositoryError> {
        self.inner.test_connection(draft).await
    }

    async fn create_connection(
        &self,
        draft: &ConnectionDraft,
    ) -> Result<Connection, RepositoryError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create_connection(draft).await
    }

    async fn update_connection(
        &self,
        id: &ConnectionId,
        draft: &ConnectionDraft,
    ) -> Result<Connection, RepositoryError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update_connection(id, draft).await
    }

    async fn delete_connection(&self, id: &ConnectionId) -> Result<bool, RepositoryError> {
        self.inner.delete_connection(id).await
    }

    async fn reindex_connection(
        &self,
        id: &ConnectionId,
    ) -> Result<ReindexResponse, RepositoryError> {
        self.reindexes.fetch_add(1, Ordering::SeqCst);
        self.inner.reindex_connection(id).await
    }
}

pub struct TestDialog<R> {
    pub dialog: ConnectionsDialog,
    pub repository: Arc<CountingRepository<R>>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn dialog_with<R>(repository: R, initial_page: Page) -> TestDialog<R>
where
    R: ConnectionRepository + 'static,
{
    let repository = Arc::new(CountingRepository::new(repository));
    let notifier = Arc::new(RecordingNotifier::default());
    let dialog = ConnectionsDialog::new(
        DialogConfig { initial_page },
        repository.clone(),
        notifier.clone(),
        notifier.clone(),
    );
    TestDialog {
        dialog,
        repository,
        notifier,
    }
}

pub fn in_memory_dialog(connections: Vec<Connection>) -> TestDialog<InMemoryConnectionRepository> {
    dialog_with(
        InMemoryConnectionRepository::with_connections(fixtures::types(), connections),
        Page::List,
    )
}
