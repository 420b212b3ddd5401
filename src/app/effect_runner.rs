//! Executes side effects returned by the reducer.
//!
//! Notifications and the close hook run inline. Repository calls are spawned
//! as tokio tasks; each task sends exactly one completion [`Action`] back on
//! the channel, success or failure.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::action::Action;
use crate::effect::Effect;
use crate::ports::{CloseNotifier, ConnectionRepository, Notifier};

pub struct EffectRunner {
    repository: Arc<dyn ConnectionRepository>,
    notifier: Arc<dyn Notifier>,
    close_notifier: Arc<dyn CloseNotifier>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        repository: Arc<dyn ConnectionRepository>,
        notifier: Arc<dyn Notifier>,
        close_notifier: Arc<dyn CloseNotifier>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            repository,
            notifier,
            close_notifier,
            action_tx,
        }
    }

    /// Returns the number of background tasks spawned; each one resolves into
    /// a completion action.
    pub fn run(&self, effects: Vec<Effect>) -> usize {
        effects
            .into_iter()
            .map(|effect| usize::from(self.run_single(effect)))
            .sum()
    }

    fn run_single(&self, effect: Effect) -> bool {
        match effect {
            Effect::Notify(notification) => {
                debug!(title = %notification.title, "notify");
                self.notifier.notify(notification);
                false
            }
            Effect::DialogClosed => {
                self.close_notifier.dialog_closed();
                false
            }
            Effect::LoadAll => {
                let repo = Arc::clone(&self.repository);
                self.spawn("load", async move {
                    let loaded = tokio::try_join!(repo.list_connections(), repo.list_available_types());
                    match loaded {
                        Ok((connections, types)) => Action::ConnectionsLoaded { connections, types },
                        Err(e) => Action::ConnectionsLoadFailed(e),
                    }
                });
                true
            }
            Effect::TestConnection { draft } => {
                let repo = Arc::clone(&self.repository);
                self.spawn("test", async move {
                    match repo.test_connection(&draft).await {
                        Ok(result) => Action::TestCompleted(result),
                        Err(e) => Action::TestFailed(e),
                    }
                });
                true
            }
            Effect::CreateConnection { draft } => {
                let repo = Arc::clone(&self.repository);
                self.spawn("create", async move {
                    match repo.create_connection(&draft).await {
                        Ok(connection) => Action::ConnectionCreated(connection),
                        Err(e) => Action::CreateFailed(e),
                    }
                });
                true
            }
            Effect::UpdateConnection { id, draft } => {
                let repo = Arc::clone(&self.repository);
                self.spawn("update", async move {
                    match repo.update_connection(&id, &draft).await {
                        Ok(connection) => Action::ConnectionUpdated(connection),
                        Err(e) => Action::UpdateFailed(e),
                    }
                });
                true
            }
            Effect::DeleteConnection { id, name } => {
                let repo = Arc::clone(&self.repository);
                self.spawn("delete", async move {
                    match repo.delete_connection(&id).await {
                        Ok(deleted) => Action::ConnectionDeleted { id, name, deleted },
                        Err(error) => Action::DeleteFailed { id, name, error },
                    }
                });
                true
            }
            Effect::ReindexConnection { id, name } => {
                let repo = Arc::clone(&self.repository);
                info!(%id, "re-index triggered");
                self.spawn("reindex", async move {
                    match repo.reindex_connection(&id).await {
                        Ok(response) => Action::ReindexCompleted { id, name, response },
                        Err(error) => Action::ReindexFailed { id, name, error },
                    }
                });
                true
            }
        }
    }

    fn spawn<F>(&self, operation: &'static str, task: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        debug!(operation, "spawning repository call");
        tokio::spawn(async move {
            let action = task.await;
            if tx.send(action).await.is_err() {
                debug!(operation, "completion dropped, receiver gone");
            }
        });
    }
}
